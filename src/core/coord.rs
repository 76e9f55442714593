//! Board coordinates and diagonal directions.
//!
//! Coordinates are 0-based `(row, col)` pairs. Stepping is always checked
//! against the board size so off-grid cells are never produced.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell address, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Is this coordinate on an `size`×`size` board?
    #[inline]
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Move `distance` cells along `dir`, or `None` when that leaves the board.
    #[must_use]
    pub fn step(self, dir: Direction, distance: usize, size: usize) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        let next = Coord::new(row, col);
        next.in_bounds(size).then_some(next)
    }

    /// Absolute row distance between two cells.
    #[inline]
    #[must_use]
    pub const fn row_distance(self, other: Coord) -> usize {
        self.row.abs_diff(other.row)
    }

    /// Signed row delta from `self` to `other`.
    #[inline]
    #[must_use]
    pub fn row_delta(self, other: Coord) -> i64 {
        other.row as i64 - self.row as i64
    }

    /// The diagonal leading from `self` toward `other`, if both row and
    /// column change.
    ///
    /// The cells need not lie on the same diagonal; only the signs of the
    /// deltas are used.
    #[must_use]
    pub fn heading(self, other: Coord) -> Option<Direction> {
        let down = match other.row.cmp(&self.row) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => return None,
        };
        let right = match other.col.cmp(&self.col) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => return None,
        };
        Some(match (down, right) {
            (false, false) => Direction::UpLeft,
            (false, true) => Direction::UpRight,
            (true, false) => Direction::DownLeft,
            (true, true) => Direction::DownRight,
        })
    }

    /// `Some((dir, distance))` when `other` lies on a diagonal through `self`.
    #[must_use]
    pub fn diagonal_to(self, other: Coord) -> Option<(Direction, usize)> {
        let distance = self.row_distance(other);
        if distance != self.col.abs_diff(other.col) {
            return None;
        }
        self.heading(other).map(|dir| (dir, distance))
    }
}

#[inline]
fn offset(base: usize, delta: i32, distance: usize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(distance)
    } else {
        base.checked_add(distance)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// One of the four diagonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(row, col)` unit delta.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}
