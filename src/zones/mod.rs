//! Zone tracking for tile locations.
//!
//! Dominoes has three fixed zones (boneyard, hand, chain) and the
//! rule that every tile is in exactly one of them at all times. The
//! tracker is the ledger behind that invariant.

pub mod tracker;

pub use tracker::{TileZone, ZoneTracker};
