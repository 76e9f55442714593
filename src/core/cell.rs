//! Cell contents.
//!
//! A cell's value fully determines its occupant: owning side and rank.
//! Pieces carry no identity beyond their position.

use serde::{Deserialize, Serialize};

use super::Side;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    P1,
    P1King,
    P2,
    P2King,
}

impl Cell {
    /// The plain pawn of a side.
    #[must_use]
    pub const fn pawn(side: Side) -> Cell {
        match side {
            Side::Side1 => Cell::P1,
            Side::Side2 => Cell::P2,
        }
    }

    /// The king of a side.
    #[must_use]
    pub const fn king(side: Side) -> Cell {
        match side {
            Side::Side1 => Cell::P1King,
            Side::Side2 => Cell::P2King,
        }
    }

    /// Owning side, `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::P1 | Cell::P1King => Some(Side::Side1),
            Cell::P2 | Cell::P2King => Some(Side::Side2),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::P1King | Cell::P2King)
    }

    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Cell::P1 | Cell::P2)
    }

    /// Does this cell hold a piece (pawn or king) of `side`?
    #[must_use]
    pub fn belongs_to(self, side: Side) -> bool {
        self.owner() == Some(side)
    }

    /// Does this cell hold a piece of `side`'s opponent?
    #[must_use]
    pub fn is_enemy_of(self, side: Side) -> bool {
        self.owner() == Some(side.opponent())
    }

    /// Single-character form used by the board dump.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::P1 => 'x',
            Cell::P1King => 'X',
            Cell::P2 => 'o',
            Cell::P2King => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::P1.owner(), Some(Side::Side1));
        assert_eq!(Cell::P1King.owner(), Some(Side::Side1));
        assert_eq!(Cell::P2.owner(), Some(Side::Side2));
        assert_eq!(Cell::P2King.owner(), Some(Side::Side2));
    }

    #[test]
    fn test_cell_rank() {
        assert!(Cell::P1.is_pawn());
        assert!(!Cell::P1.is_king());
        assert!(Cell::P2King.is_king());
        assert!(!Cell::Empty.is_pawn());
        assert!(!Cell::Empty.is_king());
    }

    #[test]
    fn test_cell_enemy() {
        assert!(Cell::P2.is_enemy_of(Side::Side1));
        assert!(Cell::P2King.is_enemy_of(Side::Side1));
        assert!(!Cell::P1King.is_enemy_of(Side::Side1));
        assert!(!Cell::Empty.is_enemy_of(Side::Side2));
    }

    #[test]
    fn test_cell_constructors() {
        assert_eq!(Cell::pawn(Side::Side2), Cell::P2);
        assert_eq!(Cell::king(Side::Side1), Cell::P1King);
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
