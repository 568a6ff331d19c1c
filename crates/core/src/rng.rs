use crate::Card;
use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};
use std::fmt::Debug;

/// Orders a freshly built deck. The last card of the slice is dealt first.
pub trait Shuffle: Debug {
    fn shuffle(&mut self, cards: &mut [Card]);
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle_items<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Shuffle for RngState {
    fn shuffle(&mut self, cards: &mut [Card]) {
        self.shuffle_items(cards);
    }
}
