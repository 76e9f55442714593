//! # draughts-engine
//!
//! Rule engine for two-player draughts (checkers).
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `GameState` owns the grid and exposes only `swap`,
//!    `clear` and `promote`. Callers never write cells directly.
//!
//! 2. **Pure Rules**: everything in `rules` is a function of a board and the
//!    acting side. Per-side geometry is written once and parametrized by
//!    the side's forward direction and enemy test.
//!
//! 3. **Synchronous Events**: `PlayerChanged` and `GameWon` fire inline,
//!    inside the mutation that causes them. `Session` additionally reports
//!    each move's effect as a `MoveOutcome`.
//!
//! ## Modules
//!
//! - `core`: sides, cells, coordinates, configuration, board, state, events
//! - `rules`: capture detection, forced capture, move classification,
//!   promotion, move enumeration
//! - `session`: the per-turn state machine a UI drives

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Direction, DraughtsConfig, EngineError, GameBuilder, GameEvent,
    GameState, Listener, Side, SideMap,
};

pub use crate::rules::{Move, MoveKind, Rejection};

pub use crate::session::{Click, MoveOutcome, Session};
