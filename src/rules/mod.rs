//! Rules engine: pure decisions over a board and the acting side.
//!
//! Nothing here stores state. Every function reads a `Board` (or the board
//! of a `GameState`) and a `Side`; only `apply_capture` and
//! `swap_and_promote` mutate, and they do so through `GameState`'s
//! primitives.

pub mod capture;
pub mod moves;

pub use capture::{
    apply_capture, can_capture, can_capture_king, can_capture_pawn, capture_landings,
    has_forced_capture, is_empty, must_capture,
};
pub use moves::{
    classify_move, is_forward_move, is_jump_move, is_promotion_row, legal_destinations,
    legal_moves, swap_and_promote, Move, MoveKind, Rejection,
};
