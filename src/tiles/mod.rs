//! Tiles and the three places they live during play.
//!
//! A tile is created once when the pool is built and is only ever
//! relocated: boneyard → hand → chain. Each container here does its
//! own bookkeeping; the conservation invariant across all three is
//! enforced by `zones::ZoneTracker`.

pub mod chain;
pub mod hand;
pub mod pool;
pub mod tile;

pub use chain::{Chain, ChainEnd};
pub use hand::Hand;
pub use pool::TilePool;
pub use tile::{Tile, TileId};
