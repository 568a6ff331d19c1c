use cosmic_golf_core::{Cell, DrawSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Reveal { cell: Cell },
    Draw { source: DrawSource },
    Swap { cell: Cell },
    Discard,
    Buy { name: String },
    LeaveShop,
}

impl AutoAction {
    pub fn stable_key(&self) -> String {
        match self {
            Self::Reveal { cell } => format!("reveal:{}", cell.position()),
            Self::Draw { source } => format!("draw:{}", source_key(*source)),
            Self::Swap { cell } => format!("swap:{}", cell.position()),
            Self::Discard => "discard".to_string(),
            Self::Buy { name } => format!("buy:{name}"),
            Self::LeaveShop => "leave_shop".to_string(),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Reveal { cell } => format!("reveal {}", cell.position()),
            Self::Draw { source } => format!("draw {}", source_key(*source)),
            Self::Swap { cell } => format!("swap {}", cell.position()),
            Self::Discard => "discard".to_string(),
            Self::Buy { name } => format!("buy {name}"),
            Self::LeaveShop => "leave shop".to_string(),
        }
    }
}

fn source_key(source: DrawSource) -> &'static str {
    match source {
        DrawSource::Stock => "stock",
        DrawSource::Discard => "discard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_use_player_positions() {
        let action = AutoAction::Swap {
            cell: Cell::new(2, 0),
        };
        assert_eq!(action.stable_key(), "swap:7");
        assert_eq!(
            AutoAction::Draw {
                source: DrawSource::Discard
            }
            .short_label(),
            "draw discard"
        );
    }
}
