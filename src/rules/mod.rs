//! Rule checks and scoring.
//!
//! Pure legality and scoring queries, separated from the turn state
//! machine that acts on their answers. The controller consults this
//! module; only the controller mutates.

pub mod engine;

pub use engine::{GameResult, Ruleset};
