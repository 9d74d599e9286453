//! # domino-engine
//!
//! An embeddable two-player domino game engine: human versus a
//! scripted computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: rendering, prompts, and argument parsing
//!    belong to front ends. They call the typed operations here and
//!    observe state through [`Game::status`].
//!
//! 2. **Per-instance configuration**: pip range, hand size, and the
//!    wildcard house rule are constructor parameters on each game.
//!    Independent games coexist; tests are deterministic.
//!
//! 3. **Rejections are data**: an illegal play, an out-of-range index,
//!    or a draw while a move is available comes back as a typed
//!    [`ActionError`] with the game unchanged. Never a panic, never a
//!    silent fixup.
//!
//! ## Architecture
//!
//! - **Deterministic RNG**: one seeded ChaCha8 stream per game; the
//!   seed plus the move history reproduces a game exactly.
//!
//! - **Zone ledger**: every tile is in exactly one of boneyard, hand,
//!   or chain; the tracker enforces conservation across every action.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration
//! - `tiles`: tile, boneyard, chain, hand
//! - `zones`: tile location ledger
//! - `rules`: legality, orientation, scoring
//! - `game`: the turn state machine and public interface
//!
//! ## Quick start
//!
//! ```
//! use domino_engine::{GameBuilder, Side};
//!
//! let mut game = GameBuilder::new().build(42).unwrap();
//!
//! // The human opens with their first legal move.
//! let mv = game.legal_moves(Side::Human)[0];
//! game.attempt_play(Side::Human, mv.tile_index, mv.end, false).unwrap();
//!
//! // The computer answers with its heaviest playable tile.
//! let outcome = game.computer_take_turn().unwrap();
//! println!("computer: {:?}", outcome);
//!
//! assert_eq!(game.status().chain.len(), 2);
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod tiles;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig,
    GameRng, GameRngState,
    Side, SideMap,
};

pub use crate::tiles::{Chain, ChainEnd, Hand, Tile, TileId, TilePool};

pub use crate::zones::{TileZone, ZoneTracker};

pub use crate::rules::{GameResult, Ruleset};

pub use crate::game::{
    ActionError, ComputerTurn, Game, GameBuilder, GameStatus, LegalMove, MoveRecord, PlayedTile,
    RecordedMove,
};
