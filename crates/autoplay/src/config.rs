use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Seeds both the deck shuffle and the reveal order.
    pub seed: u64,
    /// Buy the cheapest affordable caddie at every shop visit.
    pub shop: bool,
    /// Points assumed for each face-down card when estimating a grid.
    pub hidden_estimate: i64,
    /// The discard is only taken when it lowers the estimate by more than this.
    pub discard_take_threshold: i64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            shop: true,
            hidden_estimate: 5,
            discard_take_threshold: 0,
        }
    }
}
