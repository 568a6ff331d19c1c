use super::*;
use crate::*;

impl RunState {
    pub fn shop_offers(&self) -> Vec<&Caddie> {
        self.config
            .caddies
            .iter()
            .filter(|caddie| !self.player.has_caddie(&caddie.name))
            .collect()
    }

    pub fn shop_view(&self) -> ShopView<'_> {
        ShopView {
            offers: self.shop_offers(),
            money: self.player.money,
            owned: &self.player.caddies,
            next_hole: self.current_hole(),
        }
    }

    /// Buys offer `index` from `shop_offers`. A refused purchase changes nothing.
    pub fn buy_caddie(&mut self, index: usize, events: &mut EventBus) -> Result<Caddie, RunError> {
        self.expect_phase(Phase::Shop)?;
        let caddie = self
            .shop_offers()
            .get(index)
            .map(|caddie| (*caddie).clone())
            .ok_or(RunError::InvalidOfferIndex(index))?;
        self.player
            .purchase(caddie.clone())
            .map_err(|err| match err {
                PlayerError::NotEnoughMoney { have, need } => {
                    RunError::NotEnoughMoney { have, need }
                }
                PlayerError::DuplicateCaddie(name) => RunError::CaddieOwned(name),
            })?;
        log::info!("bought {} for {}", caddie.name, caddie.cost);
        events.push(Event::CaddieBought {
            name: caddie.name.clone(),
            cost: caddie.cost,
            money: self.player.money,
        });
        Ok(caddie)
    }
}
