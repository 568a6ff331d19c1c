use crate::render::{breakdown_lines, card_label, grid_lines};
use cosmic_golf_core::{
    Caddie, Card, Cell, DrawSource, GridError, HoleResult, Interaction, RunError, ScoreBreakdown,
    ShopView, TableView, CELL_COUNT,
};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};

/// Line-oriented player over any reader/writer pair. Once input is closed every choice
/// falls back to the first legal option so the run still finishes.
pub struct ConsoleInteraction<R, W> {
    input: R,
    out: W,
    clear: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, out: W, clear: bool) -> Self {
        Self {
            input,
            out,
            clear,
            closed: false,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, line: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", line.as_ref());
    }

    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        let _ = write!(self.out, "{prompt}");
        let _ = self.out.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                self.say("");
                log::warn!("input closed, finishing with default choices");
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Reads a number in `min..=max`, re-prompting on anything else.
    fn read_number(&mut self, prompt: &str, min: usize, max: usize) -> Option<usize> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Some(value),
                Ok(_) => self.say(format!(
                    "Invalid input. Please enter a number from {min} to {max}."
                )),
                Err(_) => self.say("Invalid input. Please enter a number."),
            }
        }
    }

    fn clear_screen(&mut self) {
        if self.clear {
            let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        }
    }

    fn show_table(&mut self, view: &TableView<'_>) {
        self.say(format!(
            "--- Hole {} | Target: {} | Cash: ${} ---",
            view.hole.hole, view.hole.target, view.money
        ));
        self.show_grid(view);
    }

    fn show_grid(&mut self, view: &TableView<'_>) {
        self.say("");
        for line in grid_lines(view.grid) {
            self.say(line);
        }
    }

    fn read_cell(&mut self, prompt: &str) -> Option<Cell> {
        self.read_number(prompt, 1, CELL_COUNT)
            .and_then(Cell::from_position)
    }
}

fn first_hidden(view: &TableView<'_>) -> Cell {
    view.hidden_cells()
        .first()
        .copied()
        .unwrap_or(Cell::new(0, 0))
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn choose_reveal_target(&mut self, view: &TableView<'_>) -> Cell {
        self.show_grid(view);
        let prompt = format!(
            "Choose a card to reveal ({} left): ",
            view.reveals_left
        );
        self.read_cell(&prompt)
            .unwrap_or_else(|| first_hidden(view))
    }

    fn choose_turn_action(&mut self, view: &TableView<'_>) -> DrawSource {
        self.clear_screen();
        self.show_table(view);
        self.say(format!(
            "Top of Discard Pile: {}",
            card_label(view.discard_top)
        ));
        if !view.can_draw(DrawSource::Stock) {
            self.say("The stock is empty.");
        }
        let choice = self.read_number(
            "Choose action: [1] Draw from Stock [2] Draw from Discard -> ",
            1,
            2,
        );
        match choice {
            Some(1) => DrawSource::Stock,
            Some(_) => DrawSource::Discard,
            None if view.can_draw(DrawSource::Stock) => DrawSource::Stock,
            None => DrawSource::Discard,
        }
    }

    fn choose_swap_or_keep(&mut self, _view: &TableView<'_>, _drawn: Card) -> bool {
        loop {
            let Some(answer) = self.read_line("Do you want to swap this card? (y/n) -> ") else {
                return false;
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.say("Please answer y or n."),
            }
        }
    }

    fn choose_swap_target(&mut self, view: &TableView<'_>, _drawn: Card) -> Cell {
        self.read_cell("Choose card position to replace (1-9): ")
            .unwrap_or_else(|| first_hidden(view))
    }

    fn choose_shop_purchase(&mut self, shop: &ShopView<'_>) -> Option<usize> {
        self.say("--- PRO SHOP ---");
        self.say(format!("Your Cash: ${}", shop.money));
        if let Some(next) = shop.next_hole {
            self.say(format!("Next up: Hole {} (target {})", next.hole, next.target));
        }
        if !shop.owned.is_empty() {
            let names: Vec<&str> = shop.owned.iter().map(|caddie| caddie.name.as_str()).collect();
            self.say(format!("Your Caddies: {}", names.join(", ")));
        }
        self.say("");
        self.say("Caddies for Sale:");
        for (index, caddie) in shop.offers.iter().enumerate() {
            self.say(format!(
                "[{}] {} (${}): {}",
                index + 1,
                caddie.name,
                caddie.cost,
                caddie.description
            ));
        }
        self.say("[0] Exit Shop");
        let choice = self.read_number("Choose an item to buy: ", 0, shop.offers.len())?;
        choice.checked_sub(1)
    }

    fn on_hole_started(&mut self, view: &TableView<'_>) {
        self.clear_screen();
        self.say(format!("--- Hole {} ---", view.hole.hole));
        self.say(format!("TARGET SCORE: {} or less", view.hole.target));
        if view.hole.boss {
            self.say("!!! BOSS HOLE !!!");
        }
        if !view.caddies.is_empty() {
            let names: Vec<&str> = view
                .caddies
                .iter()
                .map(|caddie| caddie.name.as_str())
                .collect();
            self.say(format!("Caddies: {}", names.join(", ")));
        }
    }

    fn on_grid_changed(&mut self, view: &TableView<'_>) {
        if view.grid.all_revealed() {
            self.show_grid(view);
        }
    }

    fn on_card_drawn(&mut self, source: DrawSource, card: Card) {
        match source {
            DrawSource::Stock => self.say(format!("You drew: {card}")),
            DrawSource::Discard => {
                self.say(format!("You took the {card} from the discard pile."))
            }
        }
    }

    fn on_score_computed(&mut self, breakdown: &ScoreBreakdown) {
        self.say("All cards revealed! Calculating score...");
        for line in breakdown_lines(breakdown) {
            self.say(line);
        }
        self.say("");
        self.say(format!("FINAL SCORE: {}", breakdown.total));
    }

    fn on_hole_result(&mut self, result: &HoleResult) {
        match result.earnings {
            Some(earned) => {
                self.say(format!("SUCCESS! You beat the target of {}.", result.target));
                self.say(format!("You earned ${earned}!"));
            }
            None => self.say(format!(
                "RUN OVER. Your score of {} was higher than the target of {}.",
                result.score, result.target
            )),
        }
    }

    fn on_purchase(&mut self, caddie: &Caddie, money: i64) {
        self.say("");
        self.say(format!(
            "Successfully purchased {}! Cash left: ${money}",
            caddie.name
        ));
    }

    fn on_shop_empty(&mut self, _shop: &ShopView<'_>) {
        self.say("No new caddies to buy!");
        let _ = self.read_line("Press Enter to continue to the next hole...");
    }

    fn on_rejected(&mut self, error: &RunError) {
        let message = match error {
            RunError::Grid(GridError::AlreadyRevealed(_)) => {
                "That card is already revealed. Choose another.".to_string()
            }
            RunError::Grid(GridError::OutOfBounds(_)) => "Invalid position.".to_string(),
            RunError::NotEnoughMoney { .. } => "Not enough cash!".to_string(),
            RunError::InvalidOfferIndex(_) => "Invalid choice.".to_string(),
            other => other.to_string(),
        };
        self.say(message);
    }
}
