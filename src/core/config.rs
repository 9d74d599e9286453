//! Per-game configuration.
//!
//! Every game instance owns its configuration. What the original
//! design kept as process-wide mutable flags (the "max dots" setting)
//! is a constructor parameter here, so independent games can coexist
//! and tests stay deterministic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::side::Side;

/// Construction-time configuration failures.
///
/// These are the only hard failures in the engine: a game that cannot
/// be dealt is never created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("starting hand size must be at least 1")]
    EmptyStartingHand,
    #[error("two hands of {hand_size} tiles exceed the {tile_count}-tile set")]
    HandsExceedSet { hand_size: usize, tile_count: usize },
}

/// Parameters of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest pip count on a tile face. The set holds every unordered
    /// pair in `0..=max_pips`. The engine accepts any value; front ends
    /// conventionally restrict it to 3..=9 for playability.
    pub max_pips: u8,

    /// Tiles dealt to each side before the first turn.
    pub starting_hand_size: usize,

    /// House rule: a 0-pip face matches any open end.
    pub wildcard: bool,

    /// Which seat takes the first turn.
    pub starting_side: Side,
}

impl Default for GameConfig {
    /// The traditional setup: double-six set, seven tiles each,
    /// wildcard rule on, human starts.
    fn default() -> Self {
        Self {
            max_pips: 6,
            starting_hand_size: 7,
            wildcard: true,
            starting_side: Side::Human,
        }
    }
}

impl GameConfig {
    /// Number of tiles in the full set for this pip range:
    /// `(max_pips + 1)(max_pips + 2) / 2`.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let n = self.max_pips as usize;
        (n + 1) * (n + 2) / 2
    }

    /// Check that a playable game can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_hand_size == 0 {
            return Err(ConfigError::EmptyStartingHand);
        }
        let tile_count = self.tile_count();
        if self.starting_hand_size * 2 > tile_count {
            return Err(ConfigError::HandsExceedSet {
                hand_size: self.starting_hand_size,
                tile_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.max_pips, 6);
        assert_eq!(config.starting_hand_size, 7);
        assert!(config.wildcard);
        assert_eq!(config.starting_side, Side::Human);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_tile_count() {
        let mut config = GameConfig::default();
        assert_eq!(config.tile_count(), 28);

        config.max_pips = 9;
        assert_eq!(config.tile_count(), 55);

        config.max_pips = 0;
        assert_eq!(config.tile_count(), 1);
    }

    #[test]
    fn test_zero_hand_size_rejected() {
        let config = GameConfig {
            starting_hand_size: 0,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::EmptyStartingHand));
    }

    #[test]
    fn test_oversized_hands_rejected() {
        // A double-three set has 10 tiles; two hands of 7 need 14.
        let config = GameConfig {
            max_pips: 3,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::HandsExceedSet {
                hand_size: 7,
                tile_count: 10,
            })
        );
    }

    #[test]
    fn test_exact_fit_accepted() {
        // Two hands of 5 from a 10-tile set leave an empty boneyard.
        let config = GameConfig {
            max_pips: 3,
            starting_hand_size: 5,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig {
            max_pips: 9,
            starting_hand_size: 5,
            wildcard: false,
            starting_side: Side::Computer,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
