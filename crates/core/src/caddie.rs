use crate::{Grid, Player, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HookPoint {
    Setup,
    DiscardDraw,
    Scoring,
}

/// Capability set shared by every caddie. Each hook defaults to doing nothing.
pub trait CaddieHooks {
    fn on_setup(&self, _player: &mut Player) {}

    fn on_discard_draw(&self, _player: &mut Player) {}

    /// Delta added to the final score of a fully revealed grid.
    fn apply_scoring_bonus(&self, _grid: &Grid) -> i64 {
        0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaddieAbility {
    RankBonus { rank: Rank, per_card: i64 },
    ExtraReveal { count: u8 },
    DiscardDrawReward { money: i64 },
}

impl CaddieAbility {
    pub fn hook_point(&self) -> HookPoint {
        match self {
            CaddieAbility::RankBonus { .. } => HookPoint::Scoring,
            CaddieAbility::ExtraReveal { .. } => HookPoint::Setup,
            CaddieAbility::DiscardDrawReward { .. } => HookPoint::DiscardDraw,
        }
    }
}

impl CaddieHooks for CaddieAbility {
    fn on_setup(&self, player: &mut Player) {
        if let CaddieAbility::ExtraReveal { count } = self {
            player.extra_reveals = player.extra_reveals.saturating_add(*count);
        }
    }

    fn on_discard_draw(&self, player: &mut Player) {
        if let CaddieAbility::DiscardDrawReward { money } = self {
            player.money += money;
        }
    }

    fn apply_scoring_bonus(&self, grid: &Grid) -> i64 {
        match self {
            CaddieAbility::RankBonus { rank, per_card } => {
                let count = grid.cards().filter(|card| card.rank() == *rank).count() as i64;
                count * per_card
            }
            _ => 0,
        }
    }
}

/// Purchasable ability. Names are unique within a catalog and within a player's set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Caddie {
    pub name: String,
    pub description: String,
    pub cost: i64,
    pub ability: CaddieAbility,
}

impl Caddie {
    pub fn new(name: &str, description: &str, cost: i64, ability: CaddieAbility) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cost,
            ability,
        }
    }

    pub fn iron_duke() -> Self {
        Self::new(
            "Iron Duke",
            "All Kings are worth -5 points instead of 0.",
            50,
            CaddieAbility::RankBonus {
                rank: Rank::King,
                per_card: -5,
            },
        )
    }

    pub fn cartographer() -> Self {
        Self::new(
            "Cartographer",
            "Reveal 3 cards at the start of a Hole instead of 2.",
            60,
            CaddieAbility::ExtraReveal { count: 1 },
        )
    }

    pub fn scavenger() -> Self {
        Self::new(
            "Scavenger",
            "Gain $2 every time you take a card from the discard pile.",
            40,
            CaddieAbility::DiscardDrawReward { money: 2 },
        )
    }

    pub fn hook_point(&self) -> HookPoint {
        self.ability.hook_point()
    }
}

impl CaddieHooks for Caddie {
    fn on_setup(&self, player: &mut Player) {
        self.ability.on_setup(player);
    }

    fn on_discard_draw(&self, player: &mut Player) {
        self.ability.on_discard_draw(player);
    }

    fn apply_scoring_bonus(&self, grid: &Grid) -> i64 {
        self.ability.apply_scoring_bonus(grid)
    }
}

pub fn default_catalog() -> Vec<Caddie> {
    vec![Caddie::iron_duke(), Caddie::cartographer(), Caddie::scavenger()]
}
