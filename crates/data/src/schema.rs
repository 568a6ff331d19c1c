pub use cosmic_golf_core::{Caddie, CaddieAbility, GameConfig, HoleConfig, Rank, RuleConfig};

pub const HOLES_FILE: &str = "holes.json";
pub const RULES_FILE: &str = "rules.json";
pub const CADDIES_FILE: &str = "caddies.json";
