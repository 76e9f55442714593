//! Game configuration.
//!
//! A game is configured once at startup with the board size and the side
//! that moves first. The initial placement is fixed; only its extent follows
//! the board size.

use serde::{Deserialize, Serialize};

use super::{EngineError, Side};

/// Smallest supported board. The fixed placement addresses column 7.
pub const MIN_BOARD_SIZE: usize = 8;

/// Default board size.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraughtsConfig {
    /// Board edge length N (the board is N×N).
    pub size: usize,

    /// Side to move when the game starts.
    pub starting_side: Side,
}

impl Default for DraughtsConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            starting_side: Side::Side1,
        }
    }
}

impl DraughtsConfig {
    /// Create the default configuration (8×8, `Side1` first).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_starting_side(mut self, side: Side) -> Self {
        self.starting_side = side;
        self
    }

    /// Check the configuration can produce a board.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize {
                size: self.size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(())
    }
}
