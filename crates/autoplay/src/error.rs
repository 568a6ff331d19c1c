use cosmic_golf_core::RunError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("run stopped: {0}")]
    Run(#[from] RunError),
    #[error("trace io: {0}")]
    Io(#[from] std::io::Error),
    #[error("trace encoding: {0}")]
    Serialize(#[from] serde_json::Error),
}
