use crate::{default_catalog, Caddie};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleConfig {
    pub hole: u8,
    pub target: i64,
    #[serde(default)]
    pub boss: bool,
}

impl HoleConfig {
    pub fn new(hole: u8, target: i64, boss: bool) -> Self {
        Self { hole, target, boss }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    #[serde(default = "default_initial_reveals")]
    pub initial_reveals: u8,
    #[serde(default = "default_clear_reward")]
    pub clear_reward: i64,
    #[serde(default)]
    pub starting_money: i64,
}

fn default_initial_reveals() -> u8 {
    2
}

fn default_clear_reward() -> i64 {
    10
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            initial_reveals: default_initial_reveals(),
            clear_reward: default_clear_reward(),
            starting_money: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub holes: Vec<HoleConfig>,
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub caddies: Vec<Caddie>,
}

impl GameConfig {
    pub fn standard_holes() -> Vec<HoleConfig> {
        vec![
            HoleConfig::new(1, 25, false),
            HoleConfig::new(2, 20, false),
            HoleConfig::new(3, 15, true),
            HoleConfig::new(4, 10, false),
            HoleConfig::new(5, 5, true),
        ]
    }

    pub fn hole(&self, index: usize) -> Option<&HoleConfig> {
        self.holes.get(index)
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn caddie(&self, name: &str) -> Option<&Caddie> {
        self.caddies.iter().find(|caddie| caddie.name == name)
    }

    pub fn earnings_for(&self, target: i64, score: i64) -> i64 {
        self.rules.clear_reward + (target - score)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            holes: Self::standard_holes(),
            rules: RuleConfig::default(),
            caddies: default_catalog(),
        }
    }
}
