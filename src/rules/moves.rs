//! Move predicates, classification and enumeration.
//!
//! A proposed move is classified as exactly one of:
//! - a normal move: diagonal, onto an empty cell, only when the side has no
//!   capture anywhere on the board; a pawn steps one row forward, a king
//!   slides any distance over empty cells
//! - a capture: a pawn jumps an adjacent enemy in any direction, a king lands
//!   one cell past the first enemy on an otherwise empty ray
//! - a rejection, carrying the reason

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::capture::{capture_landings, is_empty, must_capture};
use crate::core::{Board, Cell, Coord, Direction, EngineError, GameState, Side};

/// An origin/destination pair. Ephemeral: validated, applied, dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// How a legal move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    Capture,
}

/// Why a proposed move was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// No piece is selected.
    NoSelection,
    /// The origin does not hold a piece of the side to move.
    NotYourPiece,
    /// The destination is occupied.
    Occupied,
    /// The destination is not on a diagonal through the origin.
    NotDiagonal,
    /// A capture is available, so non-capturing moves are barred.
    CaptureRequired,
    /// A chain capture is in progress with a different piece.
    ChainInProgress,
    /// Neither a step nor a jump reaches the destination.
    Unreachable,
}

/// Is `destination` one row ahead of `origin` for `side`'s pawn?
///
/// Kings (and anything else on `origin`) pass unconditionally; this only
/// gates non-capturing moves.
#[must_use]
pub fn is_forward_move(board: &Board, origin: Coord, destination: Coord, side: Side) -> bool {
    if board.get(origin) == Cell::pawn(side) {
        origin.row_delta(destination) == i64::from(side.forward())
    } else {
        true
    }
}

/// Is the move long enough to be a jump?
///
/// Exactly two rows for a pawn, two or more for a king. Any other occupant
/// of `origin` is a contract violation.
pub fn is_jump_move(
    board: &Board,
    origin: Coord,
    destination: Coord,
    side: Side,
) -> Result<bool, EngineError> {
    let rows = origin.row_distance(destination);
    match board.get(origin) {
        cell if cell == Cell::pawn(side) => Ok(rows == 2),
        cell if cell == Cell::king(side) => Ok(rows >= 2),
        _ => Err(EngineError::NotOwnPiece { coord: origin, side }),
    }
}

/// Does a pawn of `side` on `origin` reach its crowning row at `destination`?
#[must_use]
pub fn is_promotion_row(board: &Board, origin: Coord, destination: Coord, side: Side) -> bool {
    board.get(origin) == Cell::pawn(side) && destination.row == side.promotion_row(board.size())
}

/// Move the piece from `origin` to `destination` for the side to move,
/// crowning it when it is a pawn reaching its last row.
///
/// The swap happens exactly once whether or not the piece is promoted.
/// Returns whether a promotion happened.
pub fn swap_and_promote(state: &mut GameState, origin: Coord, destination: Coord) -> bool {
    let side = state.current_player();
    let crowning = is_promotion_row(state.board(), origin, destination, side);
    state.swap(origin, destination);
    if crowning && state.promote(destination, side) {
        debug!(%side, at = %destination, "promoted");
        return true;
    }
    false
}

/// Classify a move by `side` on `board`.
///
/// Off-board coordinates are a contract violation and panic; check them
/// with `Board::check` first.
pub fn classify_move(
    board: &Board,
    side: Side,
    origin: Coord,
    destination: Coord,
) -> Result<MoveKind, Rejection> {
    let piece = board.get(origin);
    if !piece.belongs_to(side) {
        return Err(Rejection::NotYourPiece);
    }
    if !is_empty(board, destination) {
        return Err(Rejection::Occupied);
    }
    let Some((dir, distance)) = origin.diagonal_to(destination) else {
        return Err(Rejection::NotDiagonal);
    };

    let forced = must_capture(board, side);
    if !forced && is_forward_move(board, origin, destination, side) {
        let reachable = if piece.is_king() {
            (1..distance)
                .filter_map(|d| origin.step(dir, d, board.size()))
                .all(|c| is_empty(board, c))
        } else {
            distance == 1
        };
        if reachable {
            return Ok(MoveKind::Normal);
        }
    }

    let jump = matches!(is_jump_move(board, origin, destination, side), Ok(true));
    if jump && capture_landings(board, side, origin).contains(&destination) {
        return Ok(MoveKind::Capture);
    }

    Err(if forced {
        Rejection::CaptureRequired
    } else {
        Rejection::Unreachable
    })
}

/// Every legal destination of the `side` piece on `origin`.
#[must_use]
pub fn legal_destinations(board: &Board, side: Side, origin: Coord) -> Vec<(Coord, MoveKind)> {
    if !board.get(origin).belongs_to(side) {
        return Vec::new();
    }
    let size = board.size();
    Direction::ALL
        .into_iter()
        .flat_map(|dir| (1..size).map_while(move |d| origin.step(dir, d, size)))
        .filter_map(|to| classify_move(board, side, origin, to).ok().map(|kind| (to, kind)))
        .collect()
}

/// Every legal move for `side`. When any capture exists, only captures are
/// returned.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<(Move, MoveKind)> {
    board
        .pieces_of(side)
        .flat_map(|from| {
            legal_destinations(board, side, from)
                .into_iter()
                .map(move |(to, kind)| (Move::new(from, to), kind))
        })
        .collect()
}
