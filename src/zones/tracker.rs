//! Tile location ledger.
//!
//! Every tile of the set lives in exactly one zone at all times: the
//! boneyard, one of the two hands, or the chain. The tracker records
//! the current zone per tile identity and backs the conservation
//! invariant the controller maintains across deals, draws, and plays.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::side::Side;
use crate::tiles::tile::TileId;

/// Where a tile currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileZone {
    /// Face down in the draw pile.
    Boneyard,
    /// Held by one side.
    Hand(Side),
    /// Placed on the board.
    Chain,
}

/// Tracks the zone of every tile in the set.
#[derive(Clone, Debug, Default)]
pub struct ZoneTracker {
    locations: FxHashMap<TileId, TileZone>,
}

impl ZoneTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile in its first zone.
    ///
    /// Panics if the tile is already registered: each physical piece
    /// exists exactly once.
    pub fn register(&mut self, id: TileId, zone: TileZone) {
        if self.locations.contains_key(&id) {
            panic!("tile {:?} registered twice", id);
        }
        self.locations.insert(id, zone);
    }

    /// Move a tile to a new zone.
    ///
    /// Returns the old zone, or `None` if the tile was never registered.
    pub fn move_to(&mut self, id: TileId, zone: TileZone) -> Option<TileZone> {
        let old = self.locations.get(&id).copied()?;
        self.locations.insert(id, zone);
        Some(old)
    }

    /// The zone a tile is currently in.
    #[must_use]
    pub fn zone_of(&self, id: TileId) -> Option<TileZone> {
        self.locations.get(&id).copied()
    }

    /// Number of tiles currently in a zone.
    #[must_use]
    pub fn count_in(&self, zone: TileZone) -> usize {
        self.locations.values().filter(|&&z| z == zone).count()
    }

    /// Total tiles tracked. Constant for the lifetime of a game.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }
}
