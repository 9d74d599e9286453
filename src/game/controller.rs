//! The turn state machine and the engine's public interface.
//!
//! One [`Game`] owns the boneyard, both hands, the chain, the zone
//! ledger, and the RNG; exactly one side acts at a time. Front ends
//! supply the human's completed decisions and relay typed rejections
//! back to the player; the computer's whole turn runs inside
//! [`Game::computer_take_turn`].
//!
//! Rejected actions leave the game unchanged and keep the turn with
//! the same side. The only hard failure is a configuration that cannot
//! be dealt, caught at construction.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::GameRng;
use crate::core::side::{Side, SideMap};
use crate::rules::engine::{GameResult, Ruleset};
use crate::tiles::chain::{Chain, ChainEnd};
use crate::tiles::hand::Hand;
use crate::tiles::pool::TilePool;
use crate::tiles::tile::Tile;
use crate::zones::tracker::{TileZone, ZoneTracker};

use super::record::{MoveRecord, RecordedMove};
use super::status::GameStatus;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not the {side}'s turn")]
    NotYourTurn { side: Side },
    #[error("no tile at index {index} in a hand of {hand_size}")]
    InvalidIndex { index: usize, hand_size: usize },
    #[error("tile {tile} does not fit the {end} end")]
    IllegalMove { tile: Tile, end: ChainEnd },
    #[error("drawing is only allowed when no held tile can be played")]
    AlreadyHasMove,
    #[error("the boneyard is empty")]
    PoolEmpty,
    #[error("a draw is still possible; passing requires a dry boneyard")]
    MustDraw,
}

/// A playable (tile, end) pair, for UI move enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMove {
    /// Index of the tile in the acting side's hand.
    pub tile_index: usize,
    /// The end it may be placed on.
    pub end: ChainEnd,
}

/// A successfully applied play: the tile as oriented on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedTile {
    pub tile: Tile,
    pub end: ChainEnd,
}

/// What the computer did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerTurn {
    /// Played a tile, possibly after forced draws.
    Played {
        tile: Tile,
        end: ChainEnd,
        drew: usize,
    },
    /// Drew until the boneyard ran dry and still had no move.
    DrewAndPassed { drew: usize },
    /// Stuck with a dry boneyard from the start; the turn passes.
    Passed,
}

/// Turn state: either one side is to act, or the game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Turn(Side),
    Over,
}

/// Builder for a [`Game`].
///
/// ## Example
///
/// ```
/// use domino_engine::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .max_pips(6)
///     .starting_hand_size(7)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.pool_size(), 14); // 28 - 2 * 7
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest pip count on a tile face (front ends usually 3..=9).
    pub fn max_pips(mut self, max_pips: u8) -> Self {
        self.config.max_pips = max_pips;
        self
    }

    /// Tiles dealt to each side.
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    /// Toggle the 0-pip wildcard house rule.
    pub fn wildcard(mut self, enabled: bool) -> Self {
        self.config.wildcard = enabled;
        self
    }

    /// Which seat takes the first turn.
    pub fn starting_side(mut self, side: Side) -> Self {
        self.config.starting_side = side;
        self
    }

    /// Build the game: enumerate and shuffle the pool, deal both hands.
    pub fn build(self, seed: u64) -> Result<Game, ConfigError> {
        Game::new(self.config, seed)
    }
}

/// A configured, in-progress game of dominoes.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rules: Ruleset,
    rng: GameRng,
    pool: TilePool,
    chain: Chain,
    hands: SideMap<Hand>,
    tracker: ZoneTracker,
    phase: Phase,
    result: Option<GameResult>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Create a game from an explicit configuration.
    ///
    /// Builds and shuffles the pool, then deals
    /// `config.starting_hand_size` tiles to each side alternately,
    /// beginning with the starting side.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let pool = TilePool::build(config.max_pips, &mut rng);

        let mut tracker = ZoneTracker::new();
        for tile in pool.iter() {
            tracker.register(tile.id(), TileZone::Boneyard);
        }

        let mut game = Self {
            config,
            rules: Ruleset {
                wildcard: config.wildcard,
            },
            rng,
            pool,
            chain: Chain::new(),
            hands: SideMap::new(|_| Hand::new()),
            tracker,
            phase: Phase::Turn(config.starting_side),
            result: None,
            turn_number: 1,
            history: Vector::new(),
        };

        for i in 0..config.starting_hand_size * 2 {
            let side = if i % 2 == 0 {
                config.starting_side
            } else {
                config.starting_side.opponent()
            };
            // validate() guarantees the pool covers both starting hands
            if let Some(tile) = game.pool.draw() {
                game.hands[side].push(tile);
                game.tracker.move_to(tile.id(), TileZone::Hand(side));
            }
        }
        game.assert_conserved();

        Ok(game)
    }

    // === Read accessors ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The rule set in force.
    #[must_use]
    pub fn ruleset(&self) -> Ruleset {
        self.rules
    }

    /// The side to act, `None` once the game is over.
    #[must_use]
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            Phase::Turn(side) => Some(side),
            Phase::Over => None,
        }
    }

    /// Whether the game has reached a terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// A side's held tiles, in index order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Tile] {
        self.hands[side].as_slice()
    }

    /// The played chain.
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Tiles remaining in the boneyard.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Completed-turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every move made so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Observable snapshot for front ends. Pure read: two calls with
    /// no action in between return identical data.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            active_side: self.active_side(),
            chain: self.chain.snapshot(),
            left_end: self.chain.left_end(),
            right_end: self.chain.right_end(),
            boneyard_size: self.pool.len(),
            hand_sizes: SideMap::new(|side| self.hands[side].len()),
            turn_number: self.turn_number,
            over: self.is_over(),
            result: self.result,
        }
    }

    /// All playable (tile, end) pairs for a side. Empty once the game
    /// is over or when the side is stuck.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<LegalMove> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for (tile_index, &tile) in self.hands[side].iter().enumerate() {
            for end in self.rules.legal_ends(tile, &self.chain) {
                moves.push(LegalMove { tile_index, end });
            }
        }
        moves
    }

    // === Actions ===

    /// Play a held tile onto an end of the chain.
    ///
    /// The first tile of the game may be placed on either end in any
    /// orientation. Afterwards the tile is oriented so its glued face
    /// fits the open end (flipping once past the requested rotation if
    /// needed); a tile that fits neither way is rejected and the hand
    /// is untouched.
    pub fn attempt_play(
        &mut self,
        side: Side,
        tile_index: usize,
        end: ChainEnd,
        rotate: bool,
    ) -> Result<PlayedTile, ActionError> {
        self.ensure_active(side)?;

        let tile = self
            .hands[side]
            .get(tile_index)
            .ok_or(ActionError::InvalidIndex {
                index: tile_index,
                hand_size: self.hands[side].len(),
            })?;

        let oriented = match self.chain.end_value(end) {
            // First tile: free placement, requested orientation kept.
            None => {
                if rotate {
                    tile.flipped()
                } else {
                    tile
                }
            }
            Some(end_value) => self
                .rules
                .orient_for_placement(tile, end, end_value, rotate)
                .ok_or(ActionError::IllegalMove { tile, end })?,
        };

        self.place(side, tile_index, oriented, end);
        self.finish_turn(side);

        Ok(PlayedTile {
            tile: oriented,
            end,
        })
    }

    /// Draw a tile from the boneyard into the acting side's hand.
    ///
    /// A side may only draw when stuck: drawing while a playable tile
    /// is held is rejected with `AlreadyHasMove`. Drawing does not end
    /// the turn; the side plays the drawn tile if it fits, or draws
    /// again.
    pub fn attempt_draw(&mut self, side: Side) -> Result<Tile, ActionError> {
        self.ensure_active(side)?;

        if self.rules.has_any_legal_move(&self.hands[side], &self.chain) {
            return Err(ActionError::AlreadyHasMove);
        }

        let tile = self.pool.draw().ok_or(ActionError::PoolEmpty)?;
        self.hands[side].push(tile);
        self.tracker.move_to(tile.id(), TileZone::Hand(side));
        self.record(side, RecordedMove::Drew { tile });
        self.assert_conserved();

        Ok(tile)
    }

    /// Complete a turn without playing.
    ///
    /// Only legal when the side is stuck and the boneyard is dry;
    /// otherwise the side must play (`AlreadyHasMove`) or draw
    /// (`MustDraw`).
    pub fn pass(&mut self, side: Side) -> Result<(), ActionError> {
        self.ensure_active(side)?;

        if self.rules.has_any_legal_move(&self.hands[side], &self.chain) {
            return Err(ActionError::AlreadyHasMove);
        }
        if !self.pool.is_empty() {
            return Err(ActionError::MustDraw);
        }

        self.record(side, RecordedMove::Passed);
        self.finish_turn(side);
        Ok(())
    }

    /// Abandon the game. Ends it immediately with no winner computed.
    pub fn quit(&mut self, side: Side) -> Result<(), ActionError> {
        self.ensure_active(side)?;

        self.record(side, RecordedMove::Quit);
        self.result = Some(GameResult::Abandoned);
        self.phase = Phase::Over;
        Ok(())
    }

    /// Run the computer's whole turn: forced draws while stuck, then
    /// the heaviest playable tile, or a pass if the boneyard runs dry.
    pub fn computer_take_turn(&mut self) -> Result<ComputerTurn, ActionError> {
        self.ensure_active(Side::Computer)?;

        let mut drew = 0;
        loop {
            if let Some((tile_index, end)) = self.heaviest_move(Side::Computer) {
                // Selector only yields playable pairs, so orientation
                // cannot fail; the rejection path stays typed anyway.
                let tile = self.hands[Side::Computer]
                    .get(tile_index)
                    .ok_or(ActionError::InvalidIndex {
                        index: tile_index,
                        hand_size: self.hands[Side::Computer].len(),
                    })?;
                let oriented = match self.chain.end_value(end) {
                    None => tile,
                    Some(end_value) => self
                        .rules
                        .orient_for_placement(tile, end, end_value, false)
                        .ok_or(ActionError::IllegalMove { tile, end })?,
                };

                self.place(Side::Computer, tile_index, oriented, end);
                self.finish_turn(Side::Computer);

                return Ok(ComputerTurn::Played {
                    tile: oriented,
                    end,
                    drew,
                });
            }

            match self.pool.draw() {
                Some(tile) => {
                    self.hands[Side::Computer].push(tile);
                    self.tracker
                        .move_to(tile.id(), TileZone::Hand(Side::Computer));
                    self.record(Side::Computer, RecordedMove::Drew { tile });
                    self.assert_conserved();
                    drew += 1;
                }
                None => {
                    self.record(Side::Computer, RecordedMove::Passed);
                    self.finish_turn(Side::Computer);

                    return Ok(if drew > 0 {
                        ComputerTurn::DrewAndPassed { drew }
                    } else {
                        ComputerTurn::Passed
                    });
                }
            }
        }
    }

    // === Internals ===

    fn ensure_active(&self, side: Side) -> Result<(), ActionError> {
        match self.phase {
            Phase::Over => Err(ActionError::GameOver),
            Phase::Turn(active) if active != side => Err(ActionError::NotYourTurn { side }),
            Phase::Turn(_) => Ok(()),
        }
    }

    /// "Play your heaviest tile first": among playable (tile, end)
    /// pairs the greatest pip sum wins; ties keep hand order, then the
    /// left end.
    fn heaviest_move(&self, side: Side) -> Option<(usize, ChainEnd)> {
        let mut best: Option<(usize, ChainEnd, u32)> = None;
        for (tile_index, &tile) in self.hands[side].iter().enumerate() {
            for end in self.rules.legal_ends(tile, &self.chain) {
                let sum = tile.pip_sum();
                if best.map_or(true, |(_, _, best_sum)| sum > best_sum) {
                    best = Some((tile_index, end, sum));
                }
            }
        }
        best.map(|(tile_index, end, _)| (tile_index, end))
    }

    /// Move a validated tile from a hand onto the chain.
    fn place(&mut self, side: Side, tile_index: usize, oriented: Tile, end: ChainEnd) {
        self.hands[side].remove(tile_index);
        self.chain.place(end, oriented);
        self.tracker.move_to(oriented.id(), TileZone::Chain);
        self.record(
            side,
            RecordedMove::Played {
                tile: oriented,
                end,
            },
        );
        self.assert_conserved();
    }

    /// Close out a completed turn: count it, hand the turn to the
    /// opponent, then look for a terminal state.
    fn finish_turn(&mut self, side: Side) {
        self.turn_number += 1;
        self.phase = Phase::Turn(side.opponent());
        self.check_game_end(side);
    }

    /// Terminal states, checked after every completed turn: the acting
    /// side went out, or both sides are stuck over a dry boneyard.
    fn check_game_end(&mut self, last_to_act: Side) {
        if self.hands[last_to_act].is_empty() {
            self.result = Some(GameResult::Winner(last_to_act));
            self.phase = Phase::Over;
            return;
        }

        let human_stuck = !self
            .rules
            .has_any_legal_move(&self.hands[Side::Human], &self.chain);
        let computer_stuck = !self
            .rules
            .has_any_legal_move(&self.hands[Side::Computer], &self.chain);

        if human_stuck && computer_stuck && self.pool.is_empty() {
            self.result = Some(
                self.rules
                    .game_result(&self.hands[Side::Human], &self.hands[Side::Computer]),
            );
            self.phase = Phase::Over;
        }
    }

    fn record(&mut self, side: Side, action: RecordedMove) {
        self.history.push_back(MoveRecord {
            side,
            turn: self.turn_number,
            action,
        });
    }

    /// Every tile in exactly one zone, and the ledger agrees with the
    /// containers. Moves never change the tracker total, so the set
    /// size stays constant across any sequence of draws and plays.
    fn assert_conserved(&self) {
        debug_assert_eq!(self.tracker.count_in(TileZone::Boneyard), self.pool.len());
        debug_assert_eq!(
            self.tracker.count_in(TileZone::Hand(Side::Human)),
            self.hands[Side::Human].len()
        );
        debug_assert_eq!(
            self.tracker.count_in(TileZone::Hand(Side::Computer)),
            self.hands[Side::Computer].len()
        );
        debug_assert_eq!(self.tracker.count_in(TileZone::Chain), self.chain.len());
    }
}
