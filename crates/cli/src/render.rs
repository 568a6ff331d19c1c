use cosmic_golf_core::{Card, Cell, Grid, ScoreBreakdown, GRID_SIZE};

pub const GRID_RULE: &str = "-----------------";

/// Grid rows with player positions; face-down cards show as `[ ? ]`.
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    let mut lines = Vec::with_capacity(GRID_SIZE + 2);
    lines.push("--- YOUR GRID ---".to_string());
    for row in 0..GRID_SIZE {
        let mut line = String::new();
        for col in 0..GRID_SIZE {
            let cell = Cell::new(row, col);
            let pos = cell.position();
            match grid.visible(cell) {
                Some(card) => line.push_str(&format!("| {pos}: {:<4} ", card.to_string())),
                None => line.push_str(&format!("| {pos}: [ ? ]  ")),
            }
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(GRID_RULE.to_string());
    lines
}

pub fn card_label(card: Option<Card>) -> String {
    card.map(|card| card.to_string())
        .unwrap_or_else(|| "(empty)".to_string())
}

pub fn breakdown_lines(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut lines = vec![format!("Card total: {}", breakdown.base)];
    for cancel in &breakdown.cancellations {
        lines.push(format!(
            "Column {} pair (rows {} & {}): -{}",
            cancel.col + 1,
            cancel.rows.0 + 1,
            cancel.rows.1 + 1,
            cancel.amount
        ));
    }
    for (name, delta) in &breakdown.bonuses {
        if *delta != 0 {
            lines.push(format!("{name}: {delta:+}"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_golf_core::{calculate_score, Caddie, Deck, Rank, Suit};

    #[test]
    fn hidden_cells_show_question_marks() {
        let mut grid = Grid::new();
        grid.setup(&mut Deck::standard54());
        grid.swap(Cell::new(1, 0), Card::new(Rank::Ten, Suit::Hearts))
            .expect("swap");
        let lines = grid_lines(&grid);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "| 1: [ ? ]  | 2: [ ? ]  | 3: [ ? ]  |");
        assert_eq!(lines[2], "| 4: 10♥  | 5: [ ? ]  | 6: [ ? ]  |");
        assert_eq!(lines[4], GRID_RULE);
    }

    #[test]
    fn breakdown_names_pairs_and_bonuses() {
        let king = Card::new(Rank::King, Suit::Spades);
        let five = Card::new(Rank::Five, Suit::Clubs);
        let grid = Grid::from_cards([five, king, king, five, king, king, king, king, king]);
        let breakdown = calculate_score(&grid, &[Caddie::iron_duke()]);
        let lines = breakdown_lines(&breakdown);
        assert_eq!(lines[0], "Card total: 10");
        assert!(lines.contains(&"Column 1 pair (rows 1 & 2): -10".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Iron Duke: -35"));
        assert_eq!(card_label(None), "(empty)");
    }
}
