//! Engine-to-caller notifications.
//!
//! Events fire synchronously inside the state mutation that causes them:
//! every registered listener has run before the mutating call returns.
//! Listeners receive a shared reference and cannot reach back into the
//! state that is being updated.

use serde::{Deserialize, Serialize};

use super::Side;

/// Something the presentation layer wants to know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The side to move was (re)assigned. Fires on every assignment,
    /// including the one made when the game starts.
    PlayerChanged(Side),
    /// A side has no pieces left; the payload is the winner.
    GameWon(Side),
}

impl GameEvent {
    /// The side the event is about.
    #[must_use]
    pub fn side(self) -> Side {
        match self {
            GameEvent::PlayerChanged(side) | GameEvent::GameWon(side) => side,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerChanged(side) => write!(f, "{side} to move"),
            GameEvent::GameWon(side) => write!(f, "{side} won"),
        }
    }
}

/// A subscriber callback.
pub type Listener = Box<dyn FnMut(&GameEvent)>;
