use crate::{GameConfig, GameState, GridError, Phase, Player, RoundState, Shuffle};
use thiserror::Error;

mod hole;
mod hooks;
mod shop;
mod state;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error("the stock is empty, draw from the discard pile")]
    StockEmpty,
    #[error("the discard pile is empty")]
    DiscardEmpty,
    #[error("a card is already drawn")]
    CardAlreadyDrawn,
    #[error("no card drawn")]
    NoCardDrawn,
    #[error("a card taken from the discard pile must be swapped in")]
    MustSwap,
    #[error("not enough money: have {have}, need {need}")]
    NotEnoughMoney { have: i64, need: i64 },
    #[error("invalid shop offer index {0}")]
    InvalidOfferIndex(usize),
    #[error("caddie {0} is already owned")]
    CaddieOwned(String),
    #[error("no hole configured at index {0}")]
    MissingHole(usize),
    #[error("neither the stock nor the discard pile has a card")]
    NoLegalDraw,
}

impl RunError {
    /// Errors caused by a player choice; the caller re-prompts and nothing was mutated.
    /// The rest are structural defects and end the run.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            RunError::MissingHole(_) | RunError::NoLegalDraw | RunError::CaddieOwned(_)
        )
    }
}

#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub player: Player,
    pub state: GameState,
    pub round: RoundState,
    shuffle: Box<dyn Shuffle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn only_structural_errors_are_fatal() {
        let recoverable = [
            RunError::InvalidPhase(Phase::Setup),
            RunError::Grid(GridError::AlreadyRevealed(Cell::new(0, 0))),
            RunError::StockEmpty,
            RunError::DiscardEmpty,
            RunError::MustSwap,
            RunError::NotEnoughMoney { have: 0, need: 40 },
            RunError::InvalidOfferIndex(3),
        ];
        assert!(recoverable.iter().all(RunError::is_recoverable));
        let fatal = [
            RunError::MissingHole(5),
            RunError::NoLegalDraw,
            RunError::CaddieOwned("Scavenger".to_string()),
        ];
        assert!(fatal.iter().all(|err| !err.is_recoverable()));
    }
}
