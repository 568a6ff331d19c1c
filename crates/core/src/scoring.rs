use crate::{Caddie, CaddieHooks, Card, Grid, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Pairs checked inside each column. Every pair is checked on its own, so a column of
/// three equal ranks cancels three times.
pub const COLUMN_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub delta: i64,
    pub before: i64,
    pub after: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnCancel {
    pub col: usize,
    pub rows: (usize, usize),
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub cancellations: Vec<ColumnCancel>,
    /// Per-caddie deltas in acquisition order.
    pub bonuses: Vec<(String, i64)>,
    pub total: i64,
    pub trace: Vec<ScoreTraceStep>,
}

impl ScoreBreakdown {
    pub fn cancelled(&self) -> i64 {
        self.cancellations.iter().map(|cancel| cancel.amount).sum()
    }

    pub fn bonus_total(&self) -> i64 {
        self.bonuses.iter().map(|(_, delta)| *delta).sum()
    }

    pub fn bonus_from(&self, name: &str) -> Option<i64> {
        self.bonuses
            .iter()
            .find(|(caddie, _)| caddie == name)
            .map(|(_, delta)| *delta)
    }

    fn apply(&mut self, source: String, delta: i64) {
        let before = self.total;
        self.total += delta;
        self.trace.push(ScoreTraceStep {
            source,
            delta,
            before,
            after: self.total,
        });
    }
}

/// Scores a grid: base values, then column pair cancellation, then caddie bonuses.
/// Lower is better and the result may be negative. Empty slots count as zero and never pair.
pub fn calculate_score(grid: &Grid, caddies: &[Caddie]) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let base: i64 = grid.cards().map(|card| card.value()).sum();
    breakdown.base = base;
    breakdown.apply("base".to_string(), base);

    for col in 0..GRID_SIZE {
        let column = grid.column(col);
        for (top, bottom) in COLUMN_PAIRS {
            if let Some(amount) = pair_value(column[top], column[bottom]) {
                breakdown.cancellations.push(ColumnCancel {
                    col,
                    rows: (top, bottom),
                    amount,
                });
                breakdown.apply(format!("column {col} pair {top}-{bottom}"), -amount);
            }
        }
    }

    for caddie in caddies {
        let delta = caddie.apply_scoring_bonus(grid);
        breakdown.bonuses.push((caddie.name.clone(), delta));
        breakdown.apply(caddie.name.clone(), delta);
    }

    breakdown
}

fn pair_value(a: Option<Card>, b: Option<Card>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) if a.same_rank(&b) => Some(a.value() + b.value()),
        _ => None,
    }
}
