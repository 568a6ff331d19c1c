use cosmic_golf_core::{calculate_score, Caddie, Card, Cell, Grid};
use serde::{Deserialize, Serialize};

/// Where a card would go and how much it would move the estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub cell: Cell,
    pub delta: i64,
}

/// Scores the face-up cards exactly and charges `hidden_estimate` per face-down card.
pub fn estimate_grid(grid: &Grid, caddies: &[Caddie], hidden_estimate: i64) -> i64 {
    let known = calculate_score(&grid.face_up(), caddies).total;
    known + hidden_estimate * grid.hidden_cells().len() as i64
}

/// Estimate after `card` replaces whatever sits at `cell`.
pub fn estimate_with(
    grid: &Grid,
    caddies: &[Caddie],
    hidden_estimate: i64,
    cell: Cell,
    card: Card,
) -> Option<i64> {
    let mut next = grid.clone();
    next.swap(cell, card).ok()?;
    Some(estimate_grid(&next, caddies, hidden_estimate))
}

/// Lowest-estimate cell for `card`; ties go to the lower position. With `hidden_only`
/// the search is limited to face-down cells.
pub fn best_placement(
    grid: &Grid,
    caddies: &[Caddie],
    hidden_estimate: i64,
    card: Card,
    hidden_only: bool,
) -> Option<Placement> {
    let current = estimate_grid(grid, caddies, hidden_estimate);
    let mut best: Option<Placement> = None;
    for cell in Cell::all() {
        if hidden_only && grid.is_revealed(cell) {
            continue;
        }
        let Some(estimate) = estimate_with(grid, caddies, hidden_estimate, cell, card) else {
            continue;
        };
        let delta = estimate - current;
        if best.map_or(true, |placed| delta < placed.delta) {
            best = Some(Placement { cell, delta });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_golf_core::{Deck, Rank, Suit};

    fn hidden_grid() -> Grid {
        let mut grid = Grid::new();
        grid.setup(&mut Deck::standard54());
        grid
    }

    #[test]
    fn hidden_cells_cost_the_estimate() {
        let grid = hidden_grid();
        assert_eq!(estimate_grid(&grid, &[], 5), 45);
        assert_eq!(estimate_grid(&grid, &[], 0), 0);
    }

    #[test]
    fn joker_goes_to_a_hidden_cell() {
        let mut grid = hidden_grid();
        grid.swap(Cell::new(0, 0), Card::new(Rank::Ace, Suit::Hearts))
            .expect("swap");
        let joker = Card::joker();
        let best = best_placement(&grid, &[], 5, joker, false).expect("placement");
        assert_eq!(best.cell, Cell::new(0, 1));
        assert_eq!(best.delta, -7);
    }

    #[test]
    fn matching_rank_prefers_its_column() {
        let mut grid = hidden_grid();
        grid.swap(Cell::new(0, 2), Card::new(Rank::Nine, Suit::Hearts))
            .expect("swap");
        let nine = Card::new(Rank::Nine, Suit::Clubs);
        let best = best_placement(&grid, &[], 5, nine, true).expect("placement");
        assert_eq!(best.cell, Cell::new(1, 2));
        assert_eq!(best.delta, -14);
    }
}
