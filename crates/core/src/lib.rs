//! Jest rules engine. Keep this crate free of IO and terminal concerns.

pub mod cards;
pub mod config;
pub mod decision;
pub mod deck;
pub mod events;
pub mod game;
pub mod offer;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod strategy;
pub mod trophy;

pub use cards::*;
pub use config::*;
pub use decision::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use offer::*;
pub use player::*;
pub use rng::*;
pub use scoring::*;
pub use snapshot::*;
pub use state::*;
pub use strategy::*;
pub use trophy::*;
