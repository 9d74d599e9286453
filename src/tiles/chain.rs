//! The played-tile chain and its two open ends.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// One of the chain's two open ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainEnd {
    Left,
    Right,
}

impl ChainEnd {
    /// Both ends, left first.
    pub const BOTH: [ChainEnd; 2] = [ChainEnd::Left, ChainEnd::Right];
}

impl std::fmt::Display for ChainEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainEnd::Left => write!(f, "left"),
            ChainEnd::Right => write!(f, "right"),
        }
    }
}

/// The ordered sequence of placed tiles.
///
/// The chain stores tiles as oriented at placement time: the exposed
/// left-end value is the first tile's left face, the exposed right-end
/// value is the last tile's right face. Adjacent touching faces agree
/// (or one of them is a wildcard 0 under the house rule); the rules
/// engine guarantees that before a tile reaches the chain, the chain
/// itself only appends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: VecDeque<Tile>,
}

impl Chain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No tile has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Pip value exposed at the left end, `None` while the chain is
    /// empty. Check `is_empty` before asking for ends.
    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.tiles.front().map(|t| t.left())
    }

    /// Pip value exposed at the right end, `None` while the chain is
    /// empty.
    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.tiles.back().map(|t| t.right())
    }

    /// The exposed value at the given end.
    #[must_use]
    pub fn end_value(&self, end: ChainEnd) -> Option<u8> {
        match end {
            ChainEnd::Left => self.left_end(),
            ChainEnd::Right => self.right_end(),
        }
    }

    /// Append a tile, as oriented, to the left end.
    pub fn place_left(&mut self, tile: Tile) {
        self.tiles.push_front(tile);
    }

    /// Append a tile, as oriented, to the right end.
    pub fn place_right(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }

    /// Append a tile to the given end.
    pub fn place(&mut self, end: ChainEnd, tile: Tile) {
        match end {
            ChainEnd::Left => self.place_left(tile),
            ChainEnd::Right => self.place_right(tile),
        }
    }

    /// Iterate the placed tiles, left end to right end.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Copy of the placed tiles, left end to right end.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }
}
