use crate::{best_placement, AutoAction, AutoplayConfig, StepRecord};
use cosmic_golf_core::{
    Caddie, Card, Cell, DrawSource, HoleResult, Interaction, RngState, RunError, ShopView,
    TableView,
};
use log::{debug, info, warn};

/// Greedy decision maker. Every choice is deterministic for a given seed.
#[derive(Debug)]
pub struct AutoPlayer {
    config: AutoplayConfig,
    rng: RngState,
    planned: Option<Cell>,
    hole: u8,
    trace: Vec<StepRecord>,
    holes: Vec<HoleResult>,
}

impl AutoPlayer {
    pub fn new(config: AutoplayConfig) -> Self {
        Self {
            config,
            rng: RngState::from_seed(config.seed.wrapping_add(1)),
            planned: None,
            hole: 0,
            trace: Vec::new(),
            holes: Vec::new(),
        }
    }

    pub fn trace(&self) -> &[StepRecord] {
        &self.trace
    }

    pub fn holes(&self) -> &[HoleResult] {
        &self.holes
    }

    pub fn into_parts(self) -> (Vec<StepRecord>, Vec<HoleResult>) {
        (self.trace, self.holes)
    }

    fn record(&mut self, action: AutoAction, money: i64) {
        let step = self.trace.len() as u32 + 1;
        debug!("autoplay step {step}: {}", action.short_label());
        self.trace.push(StepRecord {
            step,
            hole: self.hole,
            action,
            money,
        });
    }

    fn threshold(&self) -> i64 {
        self.config.discard_take_threshold.max(0)
    }

    fn placement_for(&self, view: &TableView<'_>, card: Card, hidden_only: bool) -> Option<Cell> {
        best_placement(
            view.grid,
            view.caddies,
            self.config.hidden_estimate,
            card,
            hidden_only,
        )
        .map(|placement| placement.cell)
    }
}

impl Interaction for AutoPlayer {
    fn choose_reveal_target(&mut self, view: &TableView<'_>) -> Cell {
        let hidden = view.hidden_cells();
        let cell = if hidden.is_empty() {
            Cell::new(0, 0)
        } else {
            hidden[(self.rng.next_u64() % hidden.len() as u64) as usize]
        };
        self.record(AutoAction::Reveal { cell }, view.money);
        cell
    }

    fn choose_turn_action(&mut self, view: &TableView<'_>) -> DrawSource {
        self.planned = None;
        let source = match view.discard_top {
            // Once the stock is gone every turn must reveal a new cell.
            Some(top) if !view.can_draw(DrawSource::Stock) => {
                self.planned = self.placement_for(view, top, true);
                DrawSource::Discard
            }
            Some(top) => {
                let best = best_placement(
                    view.grid,
                    view.caddies,
                    self.config.hidden_estimate,
                    top,
                    false,
                );
                match best {
                    Some(placement) if placement.delta < -self.threshold() => {
                        self.planned = Some(placement.cell);
                        DrawSource::Discard
                    }
                    _ => DrawSource::Stock,
                }
            }
            None => DrawSource::Stock,
        };
        self.record(AutoAction::Draw { source }, view.money);
        source
    }

    fn choose_swap_or_keep(&mut self, view: &TableView<'_>, drawn: Card) -> bool {
        let best = best_placement(
            view.grid,
            view.caddies,
            self.config.hidden_estimate,
            drawn,
            false,
        );
        match best {
            Some(placement) if placement.delta < 0 => {
                self.planned = Some(placement.cell);
                true
            }
            _ => {
                self.record(AutoAction::Discard, view.money);
                false
            }
        }
    }

    fn choose_swap_target(&mut self, view: &TableView<'_>, drawn: Card) -> Cell {
        let cell = self
            .planned
            .take()
            .or_else(|| self.placement_for(view, drawn, !view.can_draw(DrawSource::Stock)))
            .or_else(|| view.hidden_cells().first().copied())
            .unwrap_or(Cell::new(0, 0));
        self.record(AutoAction::Swap { cell }, view.money);
        cell
    }

    fn choose_shop_purchase(&mut self, shop: &ShopView<'_>) -> Option<usize> {
        let pick = if self.config.shop {
            shop.affordable().min_by_key(|(_, caddie)| caddie.cost)
        } else {
            None
        };
        match pick {
            Some((index, caddie)) => {
                let name = caddie.name.clone();
                self.record(AutoAction::Buy { name }, shop.money);
                Some(index)
            }
            None => {
                self.record(AutoAction::LeaveShop, shop.money);
                None
            }
        }
    }

    fn on_hole_started(&mut self, view: &TableView<'_>) {
        self.hole = view.hole.hole;
        debug!("autoplay on hole {} (target {})", view.hole.hole, view.hole.target);
    }

    fn on_hole_result(&mut self, result: &HoleResult) {
        info!(
            "autoplay hole {}: score {} vs target {}",
            result.hole, result.score, result.target
        );
        self.holes.push(*result);
    }

    fn on_purchase(&mut self, caddie: &Caddie, money: i64) {
        info!("autoplay bought {} ({money} left)", caddie.name);
    }

    fn on_rejected(&mut self, error: &RunError) {
        warn!("autoplay choice rejected: {error}");
        self.trace.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_golf_core::{default_catalog, Player};

    #[test]
    fn shop_buys_cheapest_affordable_offer() {
        let catalog = default_catalog();
        let owned = Vec::new();
        let shop = ShopView {
            offers: catalog.iter().collect(),
            money: 55,
            owned: &owned,
            next_hole: None,
        };
        let mut player = AutoPlayer::new(AutoplayConfig::default());
        assert_eq!(player.choose_shop_purchase(&shop), Some(2));
        assert_eq!(
            player.trace()[0].action,
            AutoAction::Buy {
                name: "Scavenger".to_string()
            }
        );

        let poor = ShopView { money: 30, ..shop };
        assert_eq!(player.choose_shop_purchase(&poor), None);
        assert_eq!(player.trace()[1].action, AutoAction::LeaveShop);
    }

    #[test]
    fn shopping_can_be_disabled() {
        let catalog = default_catalog();
        let player_state = Player::with_money(500);
        let shop = ShopView {
            offers: catalog.iter().collect(),
            money: player_state.money,
            owned: &player_state.caddies,
            next_hole: None,
        };
        let mut player = AutoPlayer::new(AutoplayConfig {
            shop: false,
            ..AutoplayConfig::default()
        });
        assert_eq!(player.choose_shop_purchase(&shop), None);
    }
}
