//! Core engine types: sides, cells, coordinates, board, state, events.
//!
//! This module is the leaf layer. It owns the grid and the game state and
//! exposes only the primitive mutators; legality lives in `rules`.

pub mod side;
pub mod cell;
pub mod coord;
pub mod config;
pub mod board;
pub mod event;
pub mod state;
pub mod error;

pub use side::{Side, SideMap};
pub use cell::Cell;
pub use coord::{Coord, Direction};
pub use config::{DraughtsConfig, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use board::Board;
pub use event::{GameEvent, Listener};
pub use state::{GameBuilder, GameState};
pub use error::EngineError;
