//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two seats of a draughts game. `Side1` owns the `P1` pieces and moves
//! toward row 0; `Side2` owns the `P2` pieces and moves toward the last row.
//!
//! ## SideMap
//!
//! Per-side storage backed by a two-element array, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Side1,
    Side2,
}

impl Side {
    /// Both sides, `Side1` first.
    pub const ALL: [Side; 2] = [Side::Side1, Side::Side2];

    /// Get the raw side index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Side1 => 0,
            Side::Side2 => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Side1 => Side::Side2,
            Side::Side2 => Side::Side1,
        }
    }

    /// Row delta of a non-capturing pawn step.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Side::Side1 => -1,
            Side::Side2 => 1,
        }
    }

    /// The row on which this side's pawns are crowned.
    #[must_use]
    pub const fn promotion_row(self, size: usize) -> usize {
        match self {
            Side::Side1 => 0,
            Side::Side2 => size - 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Side1 => write!(f, "Side 1"),
            Side::Side2 => write!(f, "Side 2"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use draughts_engine::core::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::new(12, 12);
/// counts[Side::Side2] -= 1;
/// assert_eq!(counts[Side::Side1], 12);
/// assert_eq!(counts[Side::Side2], 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from the `Side1` and `Side2` values.
    pub const fn new(side1: T, side2: T) -> Self {
        Self { data: [side1, side2] }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self::new(factory(Side::Side1), factory(Side::Side2))
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

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Copy> SideMap<T> {
    /// The values as a `(Side1, Side2)` tuple.
    #[must_use]
    pub fn pair(&self) -> (T, T) {
        (self.data[0], self.data[1])
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
