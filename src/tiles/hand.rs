//! A side's held tiles.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// The tiles one side holds.
///
/// Order-insensitive for the rules, but index-addressed so front ends
/// can let a player pick a tile by position. Size moves by exactly one
/// per successful play or draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of held tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// No tiles left: this side has gone out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add a tile to the hand.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// The tile at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Remove and return the tile at `index`.
    ///
    /// Panics if `index` is out of bounds; callers validate with
    /// [`Hand::get`] first.
    pub fn remove(&mut self, index: usize) -> Tile {
        self.tiles.remove(index)
    }

    /// Iterate the held tiles in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The held tiles as a slice, in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Total pips held; counts against this side at a scored game end.
    #[must_use]
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut hand = Hand::new();
        hand.push(Tile::new(2, 5));
        hand.push(Tile::new(0, 3));

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.get(0), Some(Tile::new(2, 5)));
        assert_eq!(hand.get(1), Some(Tile::new(0, 3)));
        assert_eq!(hand.get(2), None);
    }

    #[test]
    fn test_remove() {
        let mut hand = Hand::new();
        hand.push(Tile::new(2, 5));
        hand.push(Tile::new(0, 3));

        let removed = hand.remove(0);

        assert_eq!(removed, Tile::new(2, 5));
        assert_eq!(hand.as_slice(), &[Tile::new(0, 3)]);
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_range_panics() {
        let mut hand = Hand::new();
        hand.remove(0);
    }

    #[test]
    fn test_pip_total() {
        let mut hand = Hand::new();
        assert_eq!(hand.pip_total(), 0);

        hand.push(Tile::new(2, 5));
        hand.push(Tile::new(6, 6));
        hand.push(Tile::new(0, 1));

        assert_eq!(hand.pip_total(), 20);
    }
}
