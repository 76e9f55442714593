//! The N×N cell grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board for a
//! snapshot is O(1). The grid size is fixed for the board's lifetime.
//!
//! Only `swap`, `clear` and `promote` mutate a live board. Raw indexing with
//! an off-grid coordinate is a caller bug and panics; `cell` is the checked
//! accessor.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::config::MIN_BOARD_SIZE;
use super::{Cell, Coord, EngineError, Side, SideMap};

/// Cells overwritten after the generic side-1 fill of the starting position.
const PLACEMENT_OVERRIDES: [(Coord, Cell); 4] = [
    (Coord::new(2, 7), Cell::P2),
    (Coord::new(2, 1), Cell::P1),
    (Coord::new(1, 2), Cell::P2),
    (Coord::new(1, 4), Cell::P2),
];

/// An N×N draughts board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Create the fixed starting position.
    ///
    /// Side 1 pawns fill the dark squares of the bottom `size / 2 - 1` rows,
    /// then four fixed cells are overwritten. The result is deliberately
    /// asymmetric: on 8×8 side 1 has 13 pawns and side 2 has 3.
    #[must_use]
    pub fn initial(size: usize) -> Self {
        assert!(
            size >= MIN_BOARD_SIZE,
            "Starting position needs a board of at least {MIN_BOARD_SIZE}x{MIN_BOARD_SIZE}"
        );

        let mut board = Self::empty(size);
        for i in 0..size / 2 - 1 {
            let first = if i % 2 == 0 { 1 } else { 0 };
            let row = size - 1 - i;
            for j in (first..size).step_by(2) {
                // Columns 1,3,5.. shift left; columns 0,2,4.. shift right.
                let col = if first == 0 { j + 1 } else { j - 1 };
                if col < size {
                    board.set(Coord::new(row, col), Cell::P1);
                }
            }
        }

        for (coord, cell) in PLACEMENT_OVERRIDES {
            board.set(coord, cell);
        }
        board
    }

    /// Create a board holding only the given pieces.
    ///
    /// ```
    /// use draughts_engine::core::{Board, Cell, Coord};
    ///
    /// let board = Board::with_pieces(8, &[
    ///     (Coord::new(5, 3), Cell::P1),
    ///     (Coord::new(4, 2), Cell::P2),
    /// ]);
    /// assert_eq!(board[Coord::new(4, 2)], Cell::P2);
    /// assert!(board[Coord::new(0, 1)].is_empty());
    /// ```
    #[must_use]
    pub fn with_pieces(size: usize, pieces: &[(Coord, Cell)]) -> Self {
        let mut board = Self::empty(size);
        for &(coord, cell) in pieces {
            board.set(coord, cell);
        }
        board
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Reject a coordinate that is off the board.
    pub fn check(&self, coord: Coord) -> Result<Coord, EngineError> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(EngineError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// Checked cell lookup.
    pub fn cell(&self, coord: Coord) -> Result<Cell, EngineError> {
        self.check(coord).map(|c| self.get(c))
    }

    /// Cell lookup. Panics on an off-board coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.offset(coord)]
    }

    /// Exchange the contents of two cells. No legality check.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let (ia, ib) = (self.offset(a), self.offset(b));
        self.cells.swap(ia, ib);
    }

    /// Empty a cell.
    pub fn clear(&mut self, coord: Coord) {
        self.set(coord, Cell::Empty);
    }

    /// Crown the pawn of `side` at `coord`.
    ///
    /// Returns `false` (and leaves the cell alone) unless the cell holds a
    /// plain pawn of that side.
    pub fn promote(&mut self, coord: Coord, side: Side) -> bool {
        if self.get(coord) != Cell::pawn(side) {
            return false;
        }
        self.set(coord, Cell::king(side));
        true
    }

    /// Iterate over every coordinate, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Iterate over `(coord, cell)` for every occupied cell.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords()
            .map(|c| (c, self.get(c)))
            .filter(|(_, cell)| !cell.is_empty())
    }

    /// Iterate over the cells holding a piece of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        self.pieces()
            .filter(move |(_, cell)| cell.belongs_to(side))
            .map(|(c, _)| c)
    }

    /// Count the pieces (pawns and kings) of each side.
    #[must_use]
    pub fn count_pieces(&self) -> SideMap<u32> {
        let mut counts = SideMap::new(0, 0);
        for cell in self.cells.iter() {
            if let Some(side) = cell.owner() {
                counts[side] += 1;
            }
        }
        counts
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        let index = self.offset(coord);
        self.cells.set(index, cell);
    }

    fn offset(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "Coordinate {coord} outside {0}x{0} board",
            self.size
        );
        coord.row * self.size + coord.col
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.offset(coord)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Coord::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
