use crate::{Card, Deck};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Row/column address of a grid slot. Rows and columns are zero based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        if (1..=CELL_COUNT).contains(&position) {
            Some(Self::from_index(position - 1))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub fn position(self) -> usize {
        self.index() + 1
    }

    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
    #[error("cell {0} is already revealed")]
    AlreadyRevealed(Cell),
}

/// Card slots plus the reveal mask that shadows them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Card>; GRID_SIZE]; GRID_SIZE],
    revealed: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: [Card; CELL_COUNT]) -> Self {
        let mut grid = Self::new();
        for (index, card) in cards.into_iter().enumerate() {
            let cell = Cell::from_index(index);
            grid.cells[cell.row][cell.col] = Some(card);
            grid.revealed[cell.row][cell.col] = true;
        }
        grid
    }

    /// Deals nine cards row-major and hides every slot. A slot stays empty if the
    /// deck runs out part way; returns how many cards were placed.
    pub fn setup(&mut self, deck: &mut Deck) -> usize {
        let mut placed = 0;
        for cell in Cell::all() {
            let card = deck.deal();
            if card.is_some() {
                placed += 1;
            }
            self.cells[cell.row][cell.col] = card;
            self.revealed[cell.row][cell.col] = false;
        }
        placed
    }

    pub fn reveal(&mut self, cell: Cell) -> Result<(), GridError> {
        Self::check(cell)?;
        if self.revealed[cell.row][cell.col] {
            return Err(GridError::AlreadyRevealed(cell));
        }
        self.revealed[cell.row][cell.col] = true;
        Ok(())
    }

    pub fn swap(&mut self, cell: Cell, card: Card) -> Result<Option<Card>, GridError> {
        Self::check(cell)?;
        let old = self.cells[cell.row][cell.col].replace(card);
        self.revealed[cell.row][cell.col] = true;
        Ok(old)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|row| row.iter().all(|flag| *flag))
    }

    pub fn card(&self, cell: Cell) -> Option<Card> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.row][cell.col]
    }

    pub fn visible(&self, cell: Cell) -> Option<Card> {
        if self.is_revealed(cell) {
            self.card(cell)
        } else {
            None
        }
    }

    pub fn face_up(&self) -> Grid {
        let mut grid = Grid::new();
        for cell in Cell::all() {
            if self.is_revealed(cell) {
                grid.cells[cell.row][cell.col] = self.card(cell);
                grid.revealed[cell.row][cell.col] = true;
            }
        }
        grid
    }

    pub fn is_revealed(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.revealed[cell.row][cell.col]
    }

    pub fn hidden_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| !self.is_revealed(*cell)).collect()
    }

    pub fn revealed_count(&self) -> usize {
        Cell::all().filter(|cell| self.is_revealed(*cell)).count()
    }

    pub fn column(&self, col: usize) -> [Option<Card>; GRID_SIZE] {
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cells.iter().flatten().flatten().copied()
    }

    pub fn rows(&self) -> &[[Option<Card>; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn mask(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.revealed
    }

    fn check(cell: Cell) -> Result<(), GridError> {
        if cell.in_bounds() {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(cell))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn setup_deals_row_major_and_hides_everything() {
        let mut deck = Deck::standard54();
        let expected: Vec<Card> = deck.cards().iter().rev().take(CELL_COUNT).copied().collect();
        let mut grid = Grid::new();
        assert_eq!(grid.setup(&mut deck), CELL_COUNT);
        for (index, card) in expected.iter().enumerate() {
            assert_eq!(grid.card(Cell::from_index(index)), Some(*card));
        }
        assert_eq!(grid.revealed_count(), 0);
        assert_eq!(deck.len(), 54 - CELL_COUNT);
    }

    #[test]
    fn reveal_rejects_repeats_and_out_of_bounds() {
        let mut grid = Grid::new();
        grid.setup(&mut Deck::standard54());
        let cell = Cell::new(1, 2);
        assert_eq!(grid.reveal(cell), Ok(()));
        assert_eq!(grid.reveal(cell), Err(GridError::AlreadyRevealed(cell)));
        let outside = Cell::new(3, 0);
        assert_eq!(grid.reveal(outside), Err(GridError::OutOfBounds(outside)));
    }

    #[test]
    fn face_up_drops_hidden_cards() {
        let mut grid = Grid::new();
        grid.setup(&mut Deck::standard54());
        grid.reveal(Cell::new(0, 0)).expect("reveal");
        let visible = grid.face_up();
        assert_eq!(visible.card(Cell::new(0, 0)), grid.card(Cell::new(0, 0)));
        assert_eq!(visible.card(Cell::new(2, 2)), None);
        assert_eq!(visible.cards().count(), 1);
        assert_eq!(visible.revealed_count(), 1);
    }

    #[test]
    fn swap_returns_old_card_and_reveals() {
        let mut grid = Grid::new();
        grid.setup(&mut Deck::standard54());
        let cell = Cell::new(0, 0);
        let before = grid.card(cell);
        let incoming = Card::new(Rank::Five, Suit::Hearts);
        assert_eq!(grid.swap(cell, incoming), Ok(before));
        assert!(grid.is_revealed(cell));
        assert_eq!(grid.card(cell), Some(incoming));
    }

    #[test]
    fn setup_leaves_slots_empty_on_short_deck() {
        let mut deck = Deck::standard54();
        while deck.len() > 4 {
            deck.deal();
        }
        let mut grid = Grid::new();
        assert_eq!(grid.setup(&mut deck), 4);
        assert!(grid.card(Cell::from_index(3)).is_some());
        assert!(grid.card(Cell::from_index(4)).is_none());
    }

    #[test]
    fn positions_map_to_cells() {
        assert_eq!(Cell::from_position(1), Some(Cell::new(0, 0)));
        assert_eq!(Cell::from_position(6), Some(Cell::new(1, 2)));
        assert_eq!(Cell::from_position(9), Some(Cell::new(2, 2)));
        assert_eq!(Cell::from_position(0), None);
        assert_eq!(Cell::from_position(10), None);
        assert_eq!(Cell::new(2, 1).position(), 8);
    }
}
