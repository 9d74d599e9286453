//! Core engine types: sides, RNG, configuration.
//!
//! The fundamental building blocks every other module leans on. A game
//! configures these once at construction; nothing here knows about
//! tiles or turns.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{ConfigError, GameConfig};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
