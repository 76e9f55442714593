//! Turn state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Coord, DraughtsConfig, EngineError, GameEvent, GameState, Side};
use crate::rules::{
    apply_capture, can_capture, classify_move, legal_destinations, legal_moves, swap_and_promote,
    Move, MoveKind, Rejection,
};

/// Result of submitting a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was not legal; nothing changed.
    Rejected(Rejection),
    /// A capture landed on a cell with a further capture; the same piece
    /// stays selected and the same side keeps moving.
    Continued,
    /// The move was applied and the other side is now to move.
    TurnEnded,
    /// The move emptied the opponent; the payload is the winner.
    Won(Side),
}

impl MoveOutcome {
    /// Was the move applied?
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Result of a click on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Click {
    /// The cell is now the selected origin.
    Selected(Coord),
    /// Nothing selected and the cell holds no piece of the side to move.
    Ignored,
    /// The click was taken as a destination.
    Moved(MoveOutcome),
}

/// One game driven turn by turn.
///
/// A turn starts with nothing selected. Selecting requires a piece of the
/// side to move. A destination is then either rejected (selection cleared),
/// a normal move (turn ends, pawns reaching the far row are crowned), or a
/// capture. Captures never crown; after one the piece stays selected while
/// it can capture again and the turn ends otherwise. During such a chain
/// only captures by that piece are accepted.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    selected: Option<Coord>,
    chain: bool,
}

impl Session {
    /// Start a game from a configuration.
    pub fn new(config: &DraughtsConfig) -> Result<Self, EngineError> {
        GameState::new(config).map(Self::from_state)
    }

    /// Drive an existing game.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            selected: None,
            chain: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.state.subscribe(listener);
    }

    #[must_use]
    pub fn current_player(&self) -> Side {
        self.state.current_player()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Is a chain capture in progress?
    #[must_use]
    pub fn in_chain(&self) -> bool {
        self.chain
    }

    /// Select `cell` as the origin of the next move.
    ///
    /// Returns whether the cell is now selected. Fails only for off-board
    /// coordinates. During a chain only the chaining piece can be selected.
    pub fn select(&mut self, cell: Coord) -> Result<bool, EngineError> {
        self.state.board().check(cell)?;
        if self.chain {
            return Ok(self.selected == Some(cell));
        }
        if !self.state.cell(cell).belongs_to(self.current_player()) {
            return Ok(false);
        }
        self.selected = Some(cell);
        Ok(true)
    }

    /// Move the selected piece to `destination`.
    pub fn move_to(&mut self, destination: Coord) -> Result<MoveOutcome, EngineError> {
        self.state.board().check(destination)?;
        let Some(origin) = self.selected else {
            return Ok(self.reject(Rejection::NoSelection, None, destination));
        };

        let side = self.current_player();
        match classify_move(self.state.board(), side, origin, destination) {
            Ok(MoveKind::Normal) => {
                debug!(%side, from = %origin, to = %destination, "move");
                swap_and_promote(&mut self.state, origin, destination);
                Ok(self.end_turn())
            }
            Ok(MoveKind::Capture) => self.capture(origin, destination),
            Err(reason) => Ok(self.reject(reason, Some(origin), destination)),
        }
    }

    /// Select `mv.from` and move it to `mv.to` in one call.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        self.state.board().check(mv.to)?;
        if !self.select(mv.from)? {
            let reason = if self.chain {
                Rejection::ChainInProgress
            } else {
                Rejection::NotYourPiece
            };
            return Ok(self.reject(reason, Some(mv.from), mv.to));
        }
        self.move_to(mv.to)
    }

    /// Handle a click the way a board UI would: with nothing selected an own
    /// piece is selected; with a selection, another own piece re-selects and
    /// any other cell is a destination.
    pub fn click(&mut self, cell: Coord) -> Result<Click, EngineError> {
        self.state.board().check(cell)?;
        let own = self.state.cell(cell).belongs_to(self.current_player());
        match self.selected {
            None if own => {
                self.select(cell)?;
                Ok(Click::Selected(cell))
            }
            None => Ok(Click::Ignored),
            Some(_) if own && !self.chain => {
                self.select(cell)?;
                Ok(Click::Selected(cell))
            }
            Some(_) => self.move_to(cell).map(Click::Moved),
        }
    }

    /// Legal moves for the side to move, restricted to the chaining piece
    /// during a chain.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Move, MoveKind)> {
        let side = self.current_player();
        match (self.chain, self.selected) {
            (true, Some(origin)) => legal_destinations(self.state.board(), side, origin)
                .into_iter()
                .map(|(to, kind)| (Move::new(origin, to), kind))
                .collect(),
            _ => legal_moves(self.state.board(), side),
        }
    }

    fn capture(&mut self, origin: Coord, destination: Coord) -> Result<MoveOutcome, EngineError> {
        let side = self.current_player();
        let winner = apply_capture(&mut self.state, origin, destination)?;
        // Only normal moves crown; a capture onto the last row leaves a pawn.
        self.state.swap(origin, destination);

        if let Some(winner) = winner {
            self.selected = None;
            self.chain = false;
            return Ok(MoveOutcome::Won(winner));
        }

        if can_capture(self.state.board(), side, destination) {
            debug!(%side, at = %destination, "chain capture continues");
            self.selected = Some(destination);
            self.chain = true;
            return Ok(MoveOutcome::Continued);
        }
        Ok(self.end_turn())
    }

    fn end_turn(&mut self) -> MoveOutcome {
        self.selected = None;
        self.chain = false;
        let next = self.current_player().opponent();
        self.state.set_current_player(next);
        MoveOutcome::TurnEnded
    }

    fn reject(&mut self, reason: Rejection, origin: Option<Coord>, destination: Coord) -> MoveOutcome {
        trace!(?reason, ?origin, to = %destination, "move rejected");
        if !self.chain {
            self.selected = None;
        }
        MoveOutcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell};

    fn session(pieces: &[(Coord, Cell)]) -> Session {
        Session::from_state(GameState::from_board(Board::with_pieces(8, pieces), Side::Side1))
    }

    #[test]
    fn test_outcome_acceptance() {
        assert!(MoveOutcome::TurnEnded.is_accepted());
        assert!(MoveOutcome::Continued.is_accepted());
        assert!(MoveOutcome::Won(Side::Side2).is_accepted());
        assert!(!MoveOutcome::Rejected(Rejection::Occupied).is_accepted());
    }

    #[test]
    fn test_rejection_clears_selection() {
        let mut s = session(&[(Coord::new(5, 0), Cell::P1), (Coord::new(0, 7), Cell::P2)]);
        assert!(s.select(Coord::new(5, 0)).unwrap());
        assert_eq!(
            s.move_to(Coord::new(5, 2)).unwrap(),
            MoveOutcome::Rejected(Rejection::NotDiagonal)
        );
        assert_eq!(s.selected(), None);
        assert_eq!(s.current_player(), Side::Side1);
    }

    #[test]
    fn test_rejection_keeps_chain_selection() {
        let mut s = session(&[
            (Coord::new(6, 1), Cell::P1),
            (Coord::new(5, 2), Cell::P2),
            (Coord::new(3, 4), Cell::P2),
        ]);
        assert_eq!(
            s.play(Move::new(Coord::new(6, 1), Coord::new(4, 3))).unwrap(),
            MoveOutcome::Continued
        );
        assert_eq!(
            s.move_to(Coord::new(4, 3)).unwrap(),
            MoveOutcome::Rejected(Rejection::Occupied)
        );
        assert_eq!(s.selected(), Some(Coord::new(4, 3)));
        assert!(s.in_chain());
    }

    #[test]
    fn test_into_state_keeps_events() {
        let mut s = session(&[(Coord::new(5, 0), Cell::P1), (Coord::new(0, 7), Cell::P2)]);
        s.play(Move::new(Coord::new(5, 0), Coord::new(4, 1))).unwrap();
        let state = s.into_state();
        assert_eq!(state.events().count(), 2);
        assert_eq!(state.current_player(), Side::Side2);
    }
}
