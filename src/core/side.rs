//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Two-variant tag naming the seats of a game: the human and the
//! scripted computer opponent. It carries no state of its own.
//!
//! ## SideMap
//!
//! Fixed two-slot per-side storage, indexable by `Side`. Both hands,
//! and anything else kept per seat, live in one of these rather than
//! in a pair of ad-hoc fields.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Both sides, in seating order (the human seat first).
    pub const ALL: [Side; 2] = [Side::Human, Side::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Slot index for `SideMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use domino_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
///
/// scores[Side::Human] = 14;
/// assert_eq!(scores[Side::Human], 14);
/// assert_eq!(scores[Side::Computer], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    ///
    /// The factory receives the `Side` for each slot.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Computer)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.iter().map(move |&side| (side, self.get(side)))
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
