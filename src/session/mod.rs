//! Turn sequencing on top of the rules engine.
//!
//! A `Session` owns a `GameState` and accepts the caller's input one
//! coordinate (or one origin/destination pair) at a time:
//! - Selection of the piece to move
//! - Classification of the destination (rejected, normal, capture)
//! - Chain captures with the same piece
//! - Turn hand-over and the win result
//!
//! Every call reports its effect as a `MoveOutcome`; the `PlayerChanged` and
//! `GameWon` events are fired by the underlying state as well.

mod turn;

pub use turn::{Click, MoveOutcome, Session};
