//! The boneyard: the shuffled draw pile of undealt tiles.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

use super::tile::Tile;

/// The face-down draw pile.
///
/// Built once per game from every unordered pip pair in `0..=max_pips`
/// and shuffled through the game RNG. Tiles only ever leave the pool;
/// nothing returns to it. An empty boneyard is a normal, expected game
/// state: it changes which actions are available, it is not a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Number of tiles in a full set for the given pip range.
    #[must_use]
    pub fn full_size(max_pips: u8) -> usize {
        let n = max_pips as usize;
        (n + 1) * (n + 2) / 2
    }

    /// Enumerate the full set and shuffle it.
    #[must_use]
    pub fn build(max_pips: u8, rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(Self::full_size(max_pips));
        for i in 0..=max_pips {
            for j in i..=max_pips {
                tiles.push(Tile::new(i, j));
            }
        }
        rng.shuffle(&mut tiles);
        Self { tiles }
    }

    /// Pool with a fixed draw order; draws pop from the back.
    /// Scaffolding for rigged positions in tests.
    #[cfg(test)]
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Remove and return the next tile, or `None` once the boneyard is
    /// empty. Callers decide what emptiness means for them.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Remaining tile count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the boneyard has run dry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the remaining tiles (draw order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_size() {
        assert_eq!(TilePool::full_size(6), 28);
        assert_eq!(TilePool::full_size(9), 55);
        assert_eq!(TilePool::full_size(0), 1);
    }

    #[test]
    fn test_build_double_six() {
        let mut rng = GameRng::new(42);
        let pool = TilePool::build(6, &mut rng);

        assert_eq!(pool.len(), 28);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_draw_to_exhaustion() {
        let mut rng = GameRng::new(42);
        let mut pool = TilePool::build(3, &mut rng);

        let mut drawn = 0;
        while pool.draw().is_some() {
            drawn += 1;
        }

        assert_eq!(drawn, 10);
        assert!(pool.is_empty());
        assert_eq!(pool.draw(), None);
    }

    #[test]
    fn test_build_is_seeded() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let pool1 = TilePool::build(6, &mut rng1);
        let pool2 = TilePool::build(6, &mut rng2);

        assert_eq!(pool1, pool2);
    }

    proptest! {
        /// Every pip range yields exactly (n+1)(n+2)/2 distinct pieces.
        #[test]
        fn prop_full_set_distinct(max_pips in 0u8..=12, seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let pool = TilePool::build(max_pips, &mut rng);

            prop_assert_eq!(pool.len(), TilePool::full_size(max_pips));

            let ids: std::collections::HashSet<_> = pool.iter().map(|t| t.id()).collect();
            prop_assert_eq!(ids.len(), pool.len());
        }
    }
}
