//! The playable game: turn state machine, history, and status.
//!
//! Everything a front end touches lives here. `Game` drives the rules
//! over the tile containers; `GameStatus` is the read side;
//! `MoveRecord` keeps the whole game replayable.

pub mod controller;
pub mod record;
pub mod status;

pub use controller::{
    ActionError, ComputerTurn, Game, GameBuilder, LegalMove, PlayedTile,
};
pub use record::{MoveRecord, RecordedMove};
pub use status::GameStatus;
