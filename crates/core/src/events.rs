use crate::{Card, Cell, DrawSource, HookPoint, Phase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    HoleStarted {
        hole: u8,
        target: i64,
        boss: bool,
        reveals: u8,
    },
    CaddieTriggered {
        name: String,
        hook: HookPoint,
        money_delta: i64,
        reveal_delta: i64,
    },
    CardRevealed {
        cell: Cell,
        card: Option<Card>,
    },
    PhaseChanged {
        phase: Phase,
    },
    CardDrawn {
        source: DrawSource,
        card: Card,
    },
    CardSwapped {
        cell: Cell,
        placed: Card,
        displaced: Option<Card>,
    },
    CardDiscarded {
        card: Card,
    },
    HoleScored {
        base: i64,
        cancelled: i64,
        bonus: i64,
        total: i64,
    },
    HoleCleared {
        score: i64,
        reward: i64,
        money: i64,
    },
    HoleFailed {
        score: i64,
        target: i64,
    },
    ShopEntered {
        offers: usize,
        money: i64,
    },
    CaddieBought {
        name: String,
        cost: i64,
        money: i64,
    },
    RunCompleted {
        earnings: i64,
        money: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }
}
