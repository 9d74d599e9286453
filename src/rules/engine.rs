//! Move legality, tile orientation, and end-of-game results.
//!
//! Everything here is a pure function over borrowed state; nothing in
//! this module mutates a game. The wildcard house rule (a 0-pip face
//! matches any open end) is a field rather than a constant because
//! engine variants run with it disabled.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::side::Side;
use crate::tiles::chain::{Chain, ChainEnd};
use crate::tiles::hand::Hand;
use crate::tiles::tile::Tile;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side won, by going out or by lower leftover pips.
    Winner(Side),
    /// Both sides blocked with equal leftover pips.
    Tie,
    /// A side quit; no score was computed.
    Abandoned,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(winner) if *winner == side)
    }
}

/// The rule set in force for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// A 0-pip face matches any open end.
    pub wildcard: bool,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self { wildcard: true }
    }
}

impl Ruleset {
    /// A single face fits an open end: equal values, or a wildcard 0.
    fn face_fits(self, face: u8, end_value: u8) -> bool {
        face == end_value || (self.wildcard && face == 0)
    }

    /// A tile is legal against an open end if either face fits it.
    #[must_use]
    pub fn is_legal_on_end(self, tile: Tile, end_value: u8) -> bool {
        self.face_fits(tile.left(), end_value) || self.face_fits(tile.right(), end_value)
    }

    /// The ends a tile may be played on.
    ///
    /// Both ends are legal for the first tile: an empty chain has
    /// nothing to match.
    #[must_use]
    pub fn legal_ends(self, tile: Tile, chain: &Chain) -> SmallVec<[ChainEnd; 2]> {
        let mut ends = SmallVec::new();
        if chain.is_empty() {
            ends.extend(ChainEnd::BOTH);
            return ends;
        }
        for end in ChainEnd::BOTH {
            if let Some(value) = chain.end_value(end) {
                if self.is_legal_on_end(tile, value) {
                    ends.push(end);
                }
            }
        }
        ends
    }

    /// Whether any held tile can be played.
    ///
    /// False for an empty hand; true for any non-empty hand while the
    /// chain is empty.
    #[must_use]
    pub fn has_any_legal_move(self, hand: &Hand, chain: &Chain) -> bool {
        if hand.is_empty() {
            return false;
        }
        if chain.is_empty() {
            return true;
        }
        hand.iter().any(|&tile| !self.legal_ends(tile, chain).is_empty())
    }

    /// Orient a tile for placement against an open end.
    ///
    /// The face glued to the chain (the right face when placing left,
    /// the left face when placing right) must fit the end value. The
    /// requested rotation is applied first; if the glued face still
    /// does not fit, the tile is flipped once more. `None` if no
    /// orientation fits.
    #[must_use]
    pub fn orient_for_placement(
        self,
        tile: Tile,
        end: ChainEnd,
        end_value: u8,
        rotate: bool,
    ) -> Option<Tile> {
        let oriented = if rotate { tile.flipped() } else { tile };
        if self.face_fits(glued_face(oriented, end), end_value) {
            return Some(oriented);
        }
        let flipped = oriented.flipped();
        if self.face_fits(glued_face(flipped, end), end_value) {
            return Some(flipped);
        }
        None
    }

    /// Leftover pips counted against a side at a scored game end.
    #[must_use]
    pub fn hand_score(self, hand: &Hand) -> u32 {
        hand.pip_total()
    }

    /// Result of a game in which no side can act any more.
    ///
    /// An emptied hand wins outright, with no score comparison.
    /// Otherwise leftover pips count against their holder: the lower
    /// total wins, equal totals tie.
    #[must_use]
    pub fn game_result(self, human: &Hand, computer: &Hand) -> GameResult {
        if human.is_empty() {
            return GameResult::Winner(Side::Human);
        }
        if computer.is_empty() {
            return GameResult::Winner(Side::Computer);
        }
        match self.hand_score(human).cmp(&self.hand_score(computer)) {
            std::cmp::Ordering::Less => GameResult::Winner(Side::Human),
            std::cmp::Ordering::Greater => GameResult::Winner(Side::Computer),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

/// The face that touches the existing chain when placing on `end`.
fn glued_face(tile: Tile, end: ChainEnd) -> u8 {
    match end {
        ChainEnd::Left => tile.right(),
        ChainEnd::Right => tile.left(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(tiles: &[(u8, u8)]) -> Hand {
        let mut hand = Hand::new();
        for &(l, r) in tiles {
            hand.push(Tile::new(l, r));
        }
        hand
    }

    #[test]
    fn test_plain_legality() {
        let rules = Ruleset { wildcard: false };

        assert!(rules.is_legal_on_end(Tile::new(2, 5), 5));
        assert!(rules.is_legal_on_end(Tile::new(5, 2), 5));
        assert!(!rules.is_legal_on_end(Tile::new(2, 4), 5));
    }

    #[test]
    fn test_wildcard_legality() {
        let with = Ruleset { wildcard: true };
        let without = Ruleset { wildcard: false };

        // A tile containing a 0 is legal against any end when the
        // house rule is on, and only against a matching end otherwise.
        assert!(with.is_legal_on_end(Tile::new(0, 4), 5));
        assert!(!without.is_legal_on_end(Tile::new(0, 4), 5));
        assert!(without.is_legal_on_end(Tile::new(0, 4), 4));
        assert!(without.is_legal_on_end(Tile::new(0, 4), 0));
    }

    #[test]
    fn test_legal_ends_empty_chain() {
        let rules = Ruleset::default();
        let chain = Chain::new();

        let ends = rules.legal_ends(Tile::new(2, 5), &chain);
        assert_eq!(ends.as_slice(), &[ChainEnd::Left, ChainEnd::Right]);
    }

    #[test]
    fn test_legal_ends_one_side() {
        let rules = Ruleset { wildcard: false };
        // Chain [5 2]: left end 5, right end 2.
        let mut chain = Chain::new();
        chain.place_right(Tile::new(5, 2));

        let ends = rules.legal_ends(Tile::new(5, 6), &chain);
        assert_eq!(ends.as_slice(), &[ChainEnd::Left]);

        let ends = rules.legal_ends(Tile::new(2, 2), &chain);
        assert_eq!(ends.as_slice(), &[ChainEnd::Right]);

        let ends = rules.legal_ends(Tile::new(5, 2), &chain);
        assert_eq!(ends.as_slice(), &[ChainEnd::Left, ChainEnd::Right]);

        let ends = rules.legal_ends(Tile::new(3, 4), &chain);
        assert!(ends.is_empty());
    }

    #[test]
    fn test_has_any_legal_move() {
        let rules = Ruleset { wildcard: false };
        let mut chain = Chain::new();

        // Any non-empty hand can open; an empty hand never can.
        assert!(rules.has_any_legal_move(&hand_of(&[(6, 6)]), &chain));
        assert!(!rules.has_any_legal_move(&Hand::new(), &chain));

        chain.place_right(Tile::new(5, 2));
        assert!(rules.has_any_legal_move(&hand_of(&[(3, 3), (1, 2)]), &chain));
        assert!(!rules.has_any_legal_move(&hand_of(&[(3, 3), (1, 4)]), &chain));
    }

    #[test]
    fn test_wildcard_hand_scenario() {
        // Chain ends 5 and 2; the hand holds only [0 4].
        let mut chain = Chain::new();
        chain.place_right(Tile::new(5, 3));
        chain.place_right(Tile::new(3, 2));
        let hand = hand_of(&[(0, 4)]);

        let with = Ruleset { wildcard: true };
        assert_eq!(
            with.legal_ends(Tile::new(0, 4), &chain).as_slice(),
            &[ChainEnd::Left, ChainEnd::Right]
        );
        assert!(with.has_any_legal_move(&hand, &chain));

        let without = Ruleset { wildcard: false };
        assert!(without.legal_ends(Tile::new(0, 4), &chain).is_empty());
        assert!(!without.has_any_legal_move(&hand, &chain));
    }

    #[test]
    fn test_orient_flips_when_needed() {
        let rules = Ruleset::default();

        // Placing [5 3] left onto end 5: the right face must glue to 5.
        let oriented = rules
            .orient_for_placement(Tile::new(5, 3), ChainEnd::Left, 5, false)
            .unwrap();
        assert_eq!(oriented, Tile::new(3, 5));

        // Already fitting: kept as requested.
        let oriented = rules
            .orient_for_placement(Tile::new(3, 5), ChainEnd::Left, 5, false)
            .unwrap();
        assert_eq!(oriented, Tile::new(3, 5));

        // Rotation request honored when it fits.
        let oriented = rules
            .orient_for_placement(Tile::new(5, 3), ChainEnd::Left, 5, true)
            .unwrap();
        assert_eq!(oriented, Tile::new(3, 5));
    }

    #[test]
    fn test_orient_right_end() {
        let rules = Ruleset::default();

        // Placing on the right glues the left face.
        let oriented = rules
            .orient_for_placement(Tile::new(6, 4), ChainEnd::Right, 4, false)
            .unwrap();
        assert_eq!(oriented, Tile::new(4, 6));
    }

    #[test]
    fn test_orient_wildcard_glues_the_zero() {
        let rules = Ruleset::default();

        // [0 4] on end 5: only the wild face can touch.
        let oriented = rules
            .orient_for_placement(Tile::new(0, 4), ChainEnd::Right, 5, false)
            .unwrap();
        assert_eq!(oriented, Tile::new(0, 4));
        assert_eq!(oriented.right(), 4); // 4 becomes the new open end
    }

    #[test]
    fn test_orient_rejects_misfit() {
        let rules = Ruleset { wildcard: false };

        assert_eq!(
            rules.orient_for_placement(Tile::new(0, 4), ChainEnd::Left, 5, false),
            None
        );
        assert_eq!(
            rules.orient_for_placement(Tile::new(1, 3), ChainEnd::Right, 5, true),
            None
        );
    }

    #[test]
    fn test_game_result_gone_out() {
        let rules = Ruleset::default();

        let result = rules.game_result(&Hand::new(), &hand_of(&[(6, 6)]));
        assert_eq!(result, GameResult::Winner(Side::Human));
        assert!(result.is_winner(Side::Human));
        assert!(!result.is_winner(Side::Computer));

        let result = rules.game_result(&hand_of(&[(1, 1)]), &Hand::new());
        assert_eq!(result, GameResult::Winner(Side::Computer));
    }

    #[test]
    fn test_game_result_scored() {
        let rules = Ruleset::default();

        // Human 14 vs computer 9: lower leftover pips win.
        let human = hand_of(&[(6, 5), (2, 1)]);
        let computer = hand_of(&[(4, 4), (1, 0)]);
        assert_eq!(rules.hand_score(&human), 14);
        assert_eq!(rules.hand_score(&computer), 9);
        assert_eq!(
            rules.game_result(&human, &computer),
            GameResult::Winner(Side::Computer)
        );

        let even = hand_of(&[(4, 5)]);
        let also_even = hand_of(&[(6, 3)]);
        assert_eq!(rules.game_result(&even, &also_even), GameResult::Tie);
    }
}
