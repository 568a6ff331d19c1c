use crate::{Card, Rank, Shuffle, Suit};

pub const JOKER_COUNT: usize = 2;
pub const DECK_SIZE: usize = Rank::STANDARD.len() * Suit::STANDARD.len() + JOKER_COUNT;

/// Stock for a single hole. Dealing is destructive and happens from the top (end of `draw`).
#[derive(Debug, Default, Clone)]
pub struct Deck {
    draw: Vec<Card>,
}

impl Deck {
    /// Canonical unshuffled set: 13 ranks for each of the 4 suits, then the two jokers.
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        let mut next_id = 1u32;
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                draw.push(Card::with_id(next_id, rank, suit));
                next_id += 1;
            }
        }
        for _ in 0..JOKER_COUNT {
            draw.push(Card::with_id(next_id, Rank::Joker, Suit::Joker));
            next_id += 1;
        }
        Self { draw }
    }

    pub fn shuffled(shuffle: &mut dyn Shuffle) -> Self {
        let mut deck = Self::standard54();
        deck.shuffle(shuffle);
        deck
    }

    pub fn shuffle(&mut self, shuffle: &mut dyn Shuffle) {
        shuffle.shuffle(&mut self.draw);
    }

    pub fn deal(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.draw.last()
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.draw
    }
}
