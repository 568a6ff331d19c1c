use crate::{calculate_score, Caddie, Deck, Grid, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("caddie {0} is already owned")]
    DuplicateCaddie(String),
    #[error("not enough money: have {have}, need {need}")]
    NotEnoughMoney { have: i64, need: i64 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub grid: Grid,
    pub money: i64,
    /// Owned caddies in acquisition order; hooks fire in this order.
    pub caddies: Vec<Caddie>,
    /// Reveals granted on top of the base quota for the hole being set up.
    #[serde(default)]
    pub extra_reveals: u8,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_money(money: i64) -> Self {
        Self {
            money,
            ..Self::default()
        }
    }

    pub fn has_caddie(&self, name: &str) -> bool {
        self.caddies.iter().any(|caddie| caddie.name == name)
    }

    pub fn add_caddie(&mut self, caddie: Caddie) -> Result<(), PlayerError> {
        if self.has_caddie(&caddie.name) {
            return Err(PlayerError::DuplicateCaddie(caddie.name));
        }
        self.caddies.push(caddie);
        Ok(())
    }

    pub fn purchase(&mut self, caddie: Caddie) -> Result<(), PlayerError> {
        if self.has_caddie(&caddie.name) {
            return Err(PlayerError::DuplicateCaddie(caddie.name));
        }
        if self.money < caddie.cost {
            return Err(PlayerError::NotEnoughMoney {
                have: self.money,
                need: caddie.cost,
            });
        }
        self.money -= caddie.cost;
        self.caddies.push(caddie);
        Ok(())
    }

    pub fn setup_grid(&mut self, deck: &mut Deck) -> usize {
        self.grid = Grid::new();
        self.grid.setup(deck)
    }

    pub fn all_cards_revealed(&self) -> bool {
        self.grid.all_revealed()
    }

    pub fn calculate_score(&self) -> ScoreBreakdown {
        calculate_score(&self.grid, &self.caddies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_checks_money_and_ownership() {
        let mut player = Player::with_money(45);
        assert_eq!(
            player.purchase(Caddie::iron_duke()),
            Err(PlayerError::NotEnoughMoney { have: 45, need: 50 })
        );
        assert_eq!(player.money, 45);
        assert!(player.caddies.is_empty());

        assert_eq!(player.purchase(Caddie::scavenger()), Ok(()));
        assert_eq!(player.money, 5);
        assert!(player.has_caddie("Scavenger"));

        player.money = 100;
        assert_eq!(
            player.purchase(Caddie::scavenger()),
            Err(PlayerError::DuplicateCaddie("Scavenger".to_string()))
        );
        assert_eq!(player.money, 100);
    }

    #[test]
    fn add_caddie_keeps_acquisition_order() {
        let mut player = Player::new();
        player.add_caddie(Caddie::cartographer()).expect("add");
        player.add_caddie(Caddie::iron_duke()).expect("add");
        let names: Vec<&str> = player.caddies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Cartographer", "Iron Duke"]);
        assert!(player.add_caddie(Caddie::iron_duke()).is_err());
    }
}
