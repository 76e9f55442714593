use super::{Coord, Side};

/// Caller contract violations.
///
/// Illegal moves are not errors; the session reports those as
/// [`crate::session::MoveOutcome::Rejected`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("coordinate {coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("cell {coord} does not hold a piece of {side}")]
    NotOwnPiece { coord: Coord, side: Side },

    #[error("move {from} -> {to} is not diagonal")]
    NotDiagonal { from: Coord, to: Coord },

    #[error("invalid board size {size}: must be at least {min}")]
    InvalidBoardSize { size: usize, min: usize },
}
