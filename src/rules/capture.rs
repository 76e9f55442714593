//! Capture detection and application.
//!
//! All geometry is expressed once over the four `Direction`s and the acting
//! side; the enemy test is `Cell::is_enemy_of(side)`. Every look-ahead goes
//! through `Coord::step`, which refuses to leave the board.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Board, Cell, Coord, Direction, EngineError, GameState, Side};

/// True iff the cell holds nothing.
#[must_use]
pub fn is_empty(board: &Board, cell: Coord) -> bool {
    board.get(cell).is_empty()
}

/// Landing cell of a single-step jump from `from` along `dir`: the adjacent
/// cell holds an enemy of `side` and the one behind it is empty.
fn pawn_landing(board: &Board, side: Side, from: Coord, dir: Direction) -> Option<Coord> {
    let size = board.size();
    let victim = from.step(dir, 1, size)?;
    let landing = from.step(dir, 2, size)?;
    (board.get(victim).is_enemy_of(side) && board.get(landing).is_empty()).then_some(landing)
}

/// Landing cell of a king capture along `dir`: walk the ray; an own piece
/// closes it, the first enemy must have an empty cell right behind it.
fn king_landing(board: &Board, side: Side, from: Coord, dir: Direction) -> Option<Coord> {
    let size = board.size();
    let mut distance = 1;
    while let Some(cell) = from.step(dir, distance, size) {
        let occupant = board.get(cell);
        if occupant.belongs_to(side) {
            return None;
        }
        if occupant.is_enemy_of(side) {
            let landing = from.step(dir, distance + 1, size)?;
            return board.get(landing).is_empty().then_some(landing);
        }
        distance += 1;
    }
    None
}

/// Can a piece of `side` standing on `cell` make a single-step jump?
///
/// Purely geometric: all four diagonals are tried whatever the piece's rank
/// or colour, and the cell itself is not inspected.
#[must_use]
pub fn can_capture_pawn(board: &Board, side: Side, cell: Coord) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| pawn_landing(board, side, cell, dir).is_some())
}

/// Can a king of `side` standing on `cell` capture along any ray?
///
/// The landing is always exactly one cell past the first enemy on the ray;
/// an own piece before that enemy blocks the ray.
#[must_use]
pub fn can_capture_king(board: &Board, side: Side, cell: Coord) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| king_landing(board, side, cell, dir).is_some())
}

/// Capture test matching the rank of the `side` piece on `cell`.
/// False for empty cells and enemy pieces.
#[must_use]
pub fn can_capture(board: &Board, side: Side, cell: Coord) -> bool {
    let piece = board.get(cell);
    if piece == Cell::pawn(side) {
        can_capture_pawn(board, side, cell)
    } else if piece == Cell::king(side) {
        can_capture_king(board, side, cell)
    } else {
        false
    }
}

/// Every cell the `side` piece on `origin` can land on by capturing.
#[must_use]
pub fn capture_landings(board: &Board, side: Side, origin: Coord) -> SmallVec<[Coord; 4]> {
    let piece = board.get(origin);
    let landing: fn(&Board, Side, Coord, Direction) -> Option<Coord> = if piece == Cell::pawn(side) {
        pawn_landing
    } else if piece == Cell::king(side) {
        king_landing
    } else {
        return SmallVec::new();
    };

    Direction::ALL
        .into_iter()
        .filter_map(|dir| landing(board, side, origin, dir))
        .collect()
}

/// Does any `side` piece among `cells` have a capture?
///
/// Cells that do not hold a piece of `side` are skipped, so the whole board
/// (`board.coords()`) is a valid argument.
#[must_use]
pub fn has_forced_capture<I>(board: &Board, side: Side, cells: I) -> bool
where
    I: IntoIterator<Item = Coord>,
{
    cells.into_iter().any(|cell| can_capture(board, side, cell))
}

/// `has_forced_capture` over every piece `side` owns.
#[must_use]
pub fn must_capture(board: &Board, side: Side) -> bool {
    has_forced_capture(board, side, board.pieces_of(side))
}

/// Remove the jumped piece for a capture by the side to move and charge it
/// to the opponent's remaining count.
///
/// The jumped piece is the first occupied cell after `origin` on the way to
/// `destination`; for a pawn jump that is the cell adjacent to `origin`. If
/// the path is empty the adjacent cell is cleared. Exactly one cell is
/// cleared and the opposing count drops by exactly one, which may fire
/// `GameWon`; the winner is returned in that case.
///
/// The caller must already have established that this is a jump; only the
/// diagonal direction is checked here.
pub fn apply_capture(
    state: &mut GameState,
    origin: Coord,
    destination: Coord,
) -> Result<Option<Side>, EngineError> {
    let board = state.board();
    board.check(origin)?;
    board.check(destination)?;
    let dir = origin
        .heading(destination)
        .ok_or(EngineError::NotDiagonal {
            from: origin,
            to: destination,
        })?;

    let size = board.size();
    let distance = origin.row_distance(destination);
    let captured = (1..distance)
        .filter_map(|d| origin.step(dir, d, size))
        .find(|&c| !board.get(c).is_empty())
        .or_else(|| origin.step(dir, 1, size))
        .ok_or(EngineError::NotDiagonal {
            from: origin,
            to: destination,
        })?;

    let side = state.current_player();
    state.clear(captured);

    let mut remaining = state.remaining();
    remaining[side.opponent()] = remaining[side.opponent()].saturating_sub(1);
    debug!(%side, from = %origin, to = %destination, %captured, "capture");

    let (p1, p2) = remaining.pair();
    Ok(state.set_remaining_counts(p1, p2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(pieces: &[((usize, usize), Cell)]) -> Board {
        let pieces: Vec<_> = pieces.iter().map(|&(c, cell)| (Coord::from(c), cell)).collect();
        Board::with_pieces(8, &pieces)
    }

    #[test]
    fn test_is_empty() {
        let b = board(&[((1, 0), Cell::P2King)]);
        assert!(is_empty(&b, Coord::new(0, 1)));
        assert!(!is_empty(&b, Coord::new(1, 0)));
    }

    #[test]
    fn test_pawn_capture_all_four_directions() {
        for enemy in [(4, 4), (4, 2), (2, 4), (2, 2)] {
            let b = board(&[((3, 3), Cell::P1), (enemy, Cell::P2)]);
            assert!(can_capture_pawn(&b, Side::Side1, Coord::new(3, 3)), "enemy at {enemy:?}");
        }
    }

    #[test]
    fn test_pawn_capture_needs_empty_landing() {
        let b = board(&[((5, 3), Cell::P1), ((4, 2), Cell::P2), ((3, 1), Cell::P2)]);
        assert!(!can_capture_pawn(&b, Side::Side1, Coord::new(5, 3)));
    }

    #[test]
    fn test_pawn_capture_landing_off_board() {
        let b = board(&[((1, 1), Cell::P1), ((0, 0), Cell::P2)]);
        assert!(!can_capture_pawn(&b, Side::Side1, Coord::new(1, 1)));

        let b = board(&[((6, 1), Cell::P2), ((7, 0), Cell::P1)]);
        assert!(!can_capture_pawn(&b, Side::Side2, Coord::new(6, 1)));
    }

    #[test]
    fn test_pawn_capture_onto_edge_row() {
        let b = board(&[((2, 3), Cell::P1), ((1, 2), Cell::P2)]);
        assert!(can_capture_pawn(&b, Side::Side1, Coord::new(2, 3)));
    }

    #[test]
    fn test_pawn_does_not_capture_own_piece() {
        let b = board(&[((5, 3), Cell::P1), ((4, 2), Cell::P1King)]);
        assert!(!can_capture_pawn(&b, Side::Side1, Coord::new(5, 3)));
    }

    #[test]
    fn test_king_capture_at_distance() {
        let b = board(&[((7, 0), Cell::P1King), ((4, 3), Cell::P2)]);
        assert!(can_capture_king(&b, Side::Side1, Coord::new(7, 0)));
        assert_eq!(
            capture_landings(&b, Side::Side1, Coord::new(7, 0)).as_slice(),
            &[Coord::new(3, 4)]
        );
    }

    #[test]
    fn test_king_blocked_by_own_piece() {
        let b = board(&[((7, 0), Cell::P2King), ((5, 2), Cell::P2), ((3, 4), Cell::P1)]);
        assert!(!can_capture_king(&b, Side::Side2, Coord::new(7, 0)));
    }

    #[test]
    fn test_king_stops_at_first_enemy() {
        let b = board(&[((7, 0), Cell::P1King), ((5, 2), Cell::P2), ((4, 3), Cell::P2)]);
        assert!(!can_capture_king(&b, Side::Side1, Coord::new(7, 0)));
    }

    #[test]
    fn test_can_capture_dispatches_on_rank() {
        let b = board(&[((7, 0), Cell::P1King), ((4, 3), Cell::P2)]);
        assert!(can_capture(&b, Side::Side1, Coord::new(7, 0)));

        let b = board(&[((7, 0), Cell::P1), ((4, 3), Cell::P2)]);
        assert!(!can_capture(&b, Side::Side1, Coord::new(7, 0)));
        assert!(!can_capture(&b, Side::Side2, Coord::new(7, 0)));
    }

    #[test]
    fn test_has_forced_capture_ignores_foreign_cells() {
        let b = board(&[((5, 3), Cell::P1), ((4, 2), Cell::P2)]);
        assert!(has_forced_capture(&b, Side::Side1, b.coords()));
        assert!(must_capture(&b, Side::Side1));
        assert!(!has_forced_capture(&b, Side::Side1, [Coord::new(4, 2)]));
        // Side 2's pawn can jump (5,3) backwards onto (6,4).
        assert!(must_capture(&b, Side::Side2));
    }

    #[test]
    fn test_apply_capture_pawn() {
        let b = board(&[((5, 3), Cell::P1), ((4, 2), Cell::P2), ((0, 1), Cell::P2)]);
        let mut state = GameState::from_board(b, Side::Side1);

        let winner = apply_capture(&mut state, Coord::new(5, 3), Coord::new(3, 1)).unwrap();
        assert_eq!(winner, None);
        assert!(state.cell(Coord::new(4, 2)).is_empty());
        assert_eq!(state.cell(Coord::new(5, 3)), Cell::P1);
        assert_eq!(state.remaining().pair(), (1, 1));
    }

    #[test]
    fn test_apply_capture_king_clears_adjacent_victim() {
        let b = board(&[((5, 5), Cell::P1King), ((4, 4), Cell::P2), ((0, 7), Cell::P2)]);
        let mut state = GameState::from_board(b, Side::Side1);

        apply_capture(&mut state, Coord::new(5, 5), Coord::new(2, 2)).unwrap();
        assert!(state.cell(Coord::new(4, 4)).is_empty());
        assert_eq!(state.cell(Coord::new(0, 7)), Cell::P2);
        assert_eq!(state.remaining()[Side::Side2], 1);
    }

    #[test]
    fn test_apply_capture_rejects_straight_line() {
        let b = board(&[((5, 3), Cell::P1), ((4, 3), Cell::P2)]);
        let mut state = GameState::from_board(b, Side::Side1);

        let err = apply_capture(&mut state, Coord::new(5, 3), Coord::new(3, 3)).unwrap_err();
        assert!(matches!(err, EngineError::NotDiagonal { .. }));
        assert_eq!(state.cell(Coord::new(4, 3)), Cell::P2);
    }

    #[test]
    fn test_apply_capture_empty_path_clears_adjacent_cell() {
        let b = board(&[((6, 6), Cell::P1King), ((0, 7), Cell::P2), ((0, 5), Cell::P2)]);
        let mut state = GameState::from_board(b.clone(), Side::Side1);

        assert_eq!(apply_capture(&mut state, Coord::new(6, 6), Coord::new(3, 3)), Ok(None));
        let changed: Vec<_> = b.coords().filter(|&x| b[x] != state.cell(x)).collect();
        assert!(changed.is_empty());
        assert_eq!(state.remaining().pair(), (1, 1));
    }

    #[test]
    fn test_apply_capture_at_board_corner() {
        let b = board(&[((7, 7), Cell::P1King), ((6, 6), Cell::P2), ((0, 1), Cell::P2)]);
        let mut state = GameState::from_board(b, Side::Side1);

        assert_eq!(apply_capture(&mut state, Coord::new(7, 7), Coord::new(5, 5)), Ok(None));
        assert!(state.cell(Coord::new(6, 6)).is_empty());
    }

    #[test]
    fn test_apply_capture_rejects_off_board() {
        let mut state = GameState::from_board(board(&[((5, 3), Cell::P1)]), Side::Side1);
        let err = apply_capture(&mut state, Coord::new(5, 3), Coord::new(9, 7)).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { .. }));
    }
}
