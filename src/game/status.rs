//! Public game snapshot.

use serde::{Deserialize, Serialize};

use crate::core::side::{Side, SideMap};
use crate::rules::engine::GameResult;
use crate::tiles::tile::Tile;

/// Observable game state, assembled on demand.
///
/// Everything a front end needs to draw a frame: whose turn it is, the
/// board, the open ends, and the public counts. Reading status never
/// mutates the game: two calls with no action in between return
/// identical data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// The side to act, `None` once the game is over.
    pub active_side: Option<Side>,

    /// The placed tiles, left end to right end, as oriented.
    pub chain: Vec<Tile>,

    /// Pip value open at the left end (`None` before the first play).
    pub left_end: Option<u8>,

    /// Pip value open at the right end (`None` before the first play).
    pub right_end: Option<u8>,

    /// Tiles remaining in the boneyard.
    pub boneyard_size: usize,

    /// Held tile counts. Sizes are public knowledge; contents are not.
    pub hand_sizes: SideMap<usize>,

    /// Completed-turn counter, starting at 1.
    pub turn_number: u32,

    /// The game has reached a terminal state.
    pub over: bool,

    /// How the game ended, if it has.
    pub result: Option<GameResult>,
}
