//! Seeded greedy autoplay over the core run driver.

mod action;
mod config;
mod error;
mod objective;
mod player;
mod runner;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use objective::*;
pub use player::*;
pub use runner::*;
pub use trace::*;
