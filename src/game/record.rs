//! Recorded moves for history and replay.

use serde::{Deserialize, Serialize};

use crate::core::side::Side;
use crate::tiles::chain::ChainEnd;
use crate::tiles::tile::Tile;

/// What a side did with (part of) a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordedMove {
    /// A tile placed on the chain, stored as oriented on the board.
    Played { tile: Tile, end: ChainEnd },
    /// A tile drawn from the boneyard.
    Drew { tile: Tile },
    /// The turn completed with no play: stuck with a dry boneyard.
    Passed,
    /// The game was abandoned.
    Quit,
}

/// A history entry: who did what, on which turn.
///
/// Together with the game seed, the history reproduces a game exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that acted.
    pub side: Side,

    /// Turn number when the move was made.
    pub turn: u32,

    /// The move itself.
    pub action: RecordedMove,
}
