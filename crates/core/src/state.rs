use crate::{Card, Deck};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Reveal,
    Play,
    Scoring,
    Shop,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DrawSource {
    Stock,
    Discard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    pub source: DrawSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub hole_index: usize,
    pub phase: Phase,
    pub reveals_left: u8,
    pub turns: u32,
    pub earnings: i64,
    #[serde(default)]
    pub last_score: Option<i64>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            hole_index: 0,
            phase: Phase::Setup,
            reveals_left: 0,
            turns: 0,
            earnings: 0,
            last_score: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hole-scoped piles, replaced every time a hole is set up.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub deck: Deck,
    pub discard: Vec<Card>,
    pub drawn: Option<DrawnCard>,
}

impl RoundState {
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.last()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleResult {
    pub hole: u8,
    pub target: i64,
    pub score: i64,
    pub success: bool,
    /// Present only when the hole was cleared.
    pub earnings: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { earnings: i64 },
    Failed { hole: u8, score: i64, target: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleReport {
    pub result: HoleResult,
    pub breakdown: crate::ScoreBreakdown,
}
