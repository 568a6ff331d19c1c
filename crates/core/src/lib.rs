//! Core game logic for Cosmic Golf. Keep this crate free of IO and platform concerns.

pub mod caddie;
pub mod cards;
pub mod config;
pub mod deck;
pub mod driver;
pub mod events;
pub mod grid;
pub mod interaction;
pub mod player;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod state;

pub use caddie::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use driver::*;
pub use events::*;
pub use grid::*;
pub use interaction::*;
pub use player::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
