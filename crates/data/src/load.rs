use crate::schema::{
    Caddie, CaddieAbility, GameConfig, HoleConfig, RuleConfig, CADDIES_FILE, HOLES_FILE, RULES_FILE,
};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Loads holes, rules and the caddie catalog from `dir`. `rules.json` may be absent.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let holes = load_holes(&dir.join(HOLES_FILE))?;
    let rules_path = dir.join(RULES_FILE);
    let rules: RuleConfig = if rules_path.exists() {
        let rules: RuleConfig = load_json(&rules_path)?;
        validate_rules(&rules).with_context(|| format!("validate {}", rules_path.display()))?;
        rules
    } else {
        log::debug!("{} missing, using default rules", rules_path.display());
        RuleConfig::default()
    };
    let caddies = load_caddies(&dir.join(CADDIES_FILE))?;

    log::info!(
        "loaded {} holes and {} caddies from {}",
        holes.len(),
        caddies.len(),
        dir.display()
    );
    Ok(GameConfig {
        holes,
        rules,
        caddies,
    })
}

pub fn load_holes(path: &Path) -> anyhow::Result<Vec<HoleConfig>> {
    let holes: Vec<HoleConfig> = load_json(path)?;
    validate_holes(&holes).with_context(|| format!("validate {}", path.display()))?;
    Ok(holes)
}

pub fn load_caddies(path: &Path) -> anyhow::Result<Vec<Caddie>> {
    let caddies: Vec<Caddie> = load_json(path)?;
    validate_caddies(&caddies).with_context(|| format!("validate {}", path.display()))?;
    Ok(caddies)
}

/// Holes must exist and be numbered 1, 2, 3... in play order.
pub fn validate_holes(holes: &[HoleConfig]) -> anyhow::Result<()> {
    if holes.is_empty() {
        bail!("at least one hole is required");
    }
    for (index, hole) in holes.iter().enumerate() {
        let expected = index + 1;
        if usize::from(hole.hole) != expected {
            bail!(
                "hole at position {expected} is numbered {}, expected {expected}",
                hole.hole
            );
        }
    }
    Ok(())
}

/// Money never starts or moves below zero.
pub fn validate_rules(rules: &RuleConfig) -> anyhow::Result<()> {
    if rules.starting_money < 0 {
        bail!("starting_money must not be negative, got {}", rules.starting_money);
    }
    if rules.clear_reward < 0 {
        bail!("clear_reward must not be negative, got {}", rules.clear_reward);
    }
    Ok(())
}

pub fn validate_caddies(caddies: &[Caddie]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for caddie in caddies {
        if caddie.name.trim().is_empty() {
            bail!("caddie name must not be empty");
        }
        if !seen.insert(caddie.name.as_str()) {
            bail!("duplicate caddie name {}", caddie.name);
        }
        if caddie.cost < 0 {
            bail!("caddie {} has negative cost {}", caddie.name, caddie.cost);
        }
        if let CaddieAbility::DiscardDrawReward { money } = caddie.ability {
            if money < 0 {
                bail!("caddie {} has negative discard reward {money}", caddie.name);
            }
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
