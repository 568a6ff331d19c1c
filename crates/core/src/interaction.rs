use crate::{
    Caddie, Card, Cell, DrawSource, Grid, HoleConfig, HoleResult, Phase, RunError, ScoreBreakdown,
};

#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub hole: &'a HoleConfig,
    pub hole_count: usize,
    pub phase: Phase,
    pub grid: &'a Grid,
    pub discard_top: Option<Card>,
    pub stock_left: usize,
    pub money: i64,
    pub reveals_left: u8,
    pub caddies: &'a [Caddie],
}

impl TableView<'_> {
    pub fn hidden_cells(&self) -> Vec<Cell> {
        self.grid.hidden_cells()
    }

    pub fn can_draw(&self, source: DrawSource) -> bool {
        match source {
            DrawSource::Stock => self.stock_left > 0,
            DrawSource::Discard => self.discard_top.is_some(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopView<'a> {
    pub offers: Vec<&'a Caddie>,
    pub money: i64,
    pub owned: &'a [Caddie],
    pub next_hole: Option<&'a HoleConfig>,
}

impl ShopView<'_> {
    pub fn affordable(&self) -> impl Iterator<Item = (usize, &Caddie)> + '_ {
        self.offers
            .iter()
            .enumerate()
            .filter(|(_, caddie)| caddie.cost <= self.money)
            .map(|(index, caddie)| (index, *caddie))
    }
}

/// Decision provider and presentation sink for a run.
///
/// The `choose_*` methods may return anything; the engine validates each answer and calls
/// `on_rejected` before asking again. The `on_*` notifications are presentation only.
pub trait Interaction {
    fn choose_reveal_target(&mut self, view: &TableView<'_>) -> Cell;

    fn choose_turn_action(&mut self, view: &TableView<'_>) -> DrawSource;

    /// `true` swaps the drawn stock card into the grid, `false` discards it.
    fn choose_swap_or_keep(&mut self, view: &TableView<'_>, drawn: Card) -> bool;

    fn choose_swap_target(&mut self, view: &TableView<'_>, drawn: Card) -> Cell;

    /// Index into `shop.offers`, or `None` to leave the shop.
    fn choose_shop_purchase(&mut self, shop: &ShopView<'_>) -> Option<usize>;

    fn on_hole_started(&mut self, _view: &TableView<'_>) {}

    fn on_grid_changed(&mut self, _view: &TableView<'_>) {}

    fn on_card_drawn(&mut self, _source: DrawSource, _card: Card) {}

    fn on_score_computed(&mut self, _breakdown: &ScoreBreakdown) {}

    fn on_hole_result(&mut self, _result: &HoleResult) {}

    fn on_purchase(&mut self, _caddie: &Caddie, _money: i64) {}

    fn on_shop_empty(&mut self, _shop: &ShopView<'_>) {}

    fn on_rejected(&mut self, _error: &RunError) {}
}
