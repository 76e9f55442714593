//! Game state: board, side to move, live-piece counts.
//!
//! ## GameState
//!
//! The single writer of a game. It owns:
//! - The board (mutated only through `swap`, `clear` and `promote`)
//! - The current side
//! - Remaining pieces per side
//! - Subscribed listeners and the log of fired events
//!
//! ## Win freeze
//!
//! `set_remaining_counts` is the only mutator of the counts. When the new
//! pair holds a zero it fires `GameWon` for the opponent and does not store
//! the pair: the counts keep their last pre-win value.

use im::Vector;
use tracing::{debug, info};

use super::event::Listener;
use super::{Board, Cell, Coord, DraughtsConfig, EngineError, GameEvent, Side, SideMap};

/// Complete state of one game.
pub struct GameState {
    board: Board,
    current: Side,
    remaining: SideMap<u32>,
    winner: Option<Side>,
    events: Vector<GameEvent>,
    listeners: Vec<Listener>,
}

impl GameState {
    /// Start a game with the fixed starting position and no listeners.
    pub fn new(config: &DraughtsConfig) -> Result<Self, EngineError> {
        GameBuilder::new().config(*config).build()
    }

    /// Start a game from an arbitrary position.
    ///
    /// Remaining counts are taken from the board.
    #[must_use]
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self::start(board, to_move, Vec::new())
    }

    fn start(board: Board, to_move: Side, listeners: Vec<Listener>) -> Self {
        let mut state = Self {
            board,
            current: to_move,
            remaining: SideMap::new(0, 0),
            winner: None,
            events: Vector::new(),
            listeners,
        };
        state.set_current_player(to_move);
        let (p1, p2) = state.board.count_pieces().pair();
        state.set_remaining_counts(p1, p2);
        state
    }

    /// Register a listener for future events.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An independent copy of the board (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board.get(coord)
    }

    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current
    }

    /// Remaining pieces per side, as last stored.
    #[must_use]
    pub fn remaining(&self) -> SideMap<u32> {
        self.remaining
    }

    /// The winner, once a `GameWon` event has fired.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every event fired so far, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    // === Mutators ===

    /// Assign the side to move and fire `PlayerChanged`.
    pub fn set_current_player(&mut self, side: Side) {
        self.current = side;
        debug!(%side, "player changed");
        self.notify(GameEvent::PlayerChanged(side));
    }

    /// Store new remaining counts, or fire `GameWon` if one of them is zero.
    ///
    /// Returns the winner when the win fired. The stored counts are left
    /// untouched in that case.
    pub fn set_remaining_counts(&mut self, p1: u32, p2: u32) -> Option<Side> {
        let winner = if p1 == 0 {
            Side::Side2
        } else if p2 == 0 {
            Side::Side1
        } else {
            self.remaining = SideMap::new(p1, p2);
            return None;
        };

        info!(%winner, p1, p2, "game won");
        self.winner = Some(winner);
        self.notify(GameEvent::GameWon(winner));
        Some(winner)
    }

    /// Exchange two cells. Callers must have validated the move.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        self.board.swap(a, b);
    }

    /// Empty a cell.
    pub fn clear(&mut self, coord: Coord) {
        self.board.clear(coord);
    }

    /// Crown a pawn of `side`. No-op unless the cell holds one.
    pub fn promote(&mut self, coord: Coord, side: Side) -> bool {
        self.board.promote(coord, side)
    }

    fn notify(&mut self, event: GameEvent) {
        self.events.push_back(event);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .field("winner", &self.winner)
            .field("events", &self.events)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Builder for creating a `GameState`.
///
/// Listeners given to the builder observe the events fired while the game
/// is being set up, including the initial `PlayerChanged`.
#[derive(Default)]
pub struct GameBuilder {
    config: DraughtsConfig,
    board: Option<Board>,
    listeners: Vec<Listener>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: DraughtsConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from this position instead of the fixed starting one.
    ///
    /// The board brings its own size: `DraughtsConfig::size` and its
    /// minimum are ignored, only `starting_side` is taken from the config.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn listener(mut self, listener: impl FnMut(&GameEvent) + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the game.
    ///
    /// Without a board the config is validated and the starting position
    /// is laid out at `config.size`; with one the board's size wins.
    pub fn build(self) -> Result<GameState, EngineError> {
        let board = match self.board {
            Some(board) => board,
            None => {
                self.config.validate()?;
                Board::initial(self.config.size)
            }
        };
        Ok(GameState::start(board, self.config.starting_side, self.listeners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<GameEvent>>>, impl FnMut(&GameEvent) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |e: &GameEvent| sink.borrow_mut().push(*e))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(&DraughtsConfig::default()).unwrap();
        assert_eq!(state.current_player(), Side::Side1);
        assert_eq!(state.remaining().pair(), (13, 3));
        assert_eq!(state.winner(), None);
        assert_eq!(
            state.events().copied().collect::<Vec<_>>(),
            vec![GameEvent::PlayerChanged(Side::Side1)]
        );
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let err = GameState::new(&DraughtsConfig::new().with_size(4)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidBoardSize { size: 4, .. }));
    }

    #[test]
    fn test_builder_listener_sees_start_event() {
        let (seen, listener) = recorder();
        let state = GameBuilder::new()
            .config(DraughtsConfig::new().with_starting_side(Side::Side2))
            .listener(listener)
            .build()
            .unwrap();

        assert_eq!(state.current_player(), Side::Side2);
        assert_eq!(*seen.borrow(), vec![GameEvent::PlayerChanged(Side::Side2)]);
    }

    #[test]
    fn test_set_current_player_notifies_every_time() {
        let (seen, listener) = recorder();
        let mut state = GameState::new(&DraughtsConfig::default()).unwrap();
        state.subscribe(listener);

        state.set_current_player(Side::Side2);
        state.set_current_player(Side::Side2);

        assert_eq!(
            *seen.borrow(),
            vec![
                GameEvent::PlayerChanged(Side::Side2),
                GameEvent::PlayerChanged(Side::Side2)
            ]
        );
    }

    #[test]
    fn test_set_remaining_counts_stores() {
        let mut state = GameState::new(&DraughtsConfig::default()).unwrap();
        assert_eq!(state.set_remaining_counts(10, 2), None);
        assert_eq!(state.remaining().pair(), (10, 2));
    }

    #[test]
    fn test_zero_side1_count_freezes_and_side2_wins() {
        let (seen, listener) = recorder();
        let mut state = GameState::new(&DraughtsConfig::default()).unwrap();
        state.subscribe(listener);
        state.set_remaining_counts(4, 5);

        assert_eq!(state.set_remaining_counts(0, 5), Some(Side::Side2));
        assert_eq!(state.remaining().pair(), (4, 5));
        assert_eq!(state.winner(), Some(Side::Side2));
        assert_eq!(*seen.borrow(), vec![GameEvent::GameWon(Side::Side2)]);
    }

    #[test]
    fn test_zero_side2_count_freezes_and_side1_wins() {
        let mut state = GameState::new(&DraughtsConfig::default()).unwrap();
        let before = state.remaining();

        assert_eq!(state.set_remaining_counts(7, 0), Some(Side::Side1));
        assert_eq!(state.remaining(), before);
        assert!(state.is_over());
    }

    #[test]
    fn test_from_board_counts_pieces() {
        let board = Board::with_pieces(
            8,
            &[
                (Coord::new(5, 0), Cell::P1),
                (Coord::new(5, 2), Cell::P1King),
                (Coord::new(2, 1), Cell::P2),
            ],
        );
        let state = GameState::from_board(board, Side::Side2);
        assert_eq!(state.remaining().pair(), (2, 1));
        assert_eq!(state.current_player(), Side::Side2);
    }

    #[test]
    fn test_mutators_delegate_to_board() {
        let board = Board::with_pieces(8, &[(Coord::new(1, 0), Cell::P1), (Coord::new(6, 1), Cell::P2)]);
        let mut state = GameState::from_board(board, Side::Side1);

        state.swap(Coord::new(1, 0), Coord::new(0, 1));
        assert!(state.promote(Coord::new(0, 1), Side::Side1));
        assert_eq!(state.cell(Coord::new(0, 1)), Cell::P1King);

        state.clear(Coord::new(6, 1));
        assert!(state.cell(Coord::new(6, 1)).is_empty());
    }

    #[test]
    fn test_builder_board_overrides_config_size() {
        let board = Board::with_pieces(6, &[(Coord::new(4, 1), Cell::P1), (Coord::new(1, 0), Cell::P2)]);
        let config = DraughtsConfig::new().with_starting_side(Side::Side2);
        let state = GameBuilder::new().config(config).board(board).build().unwrap();

        assert_eq!(state.size(), 6);
        assert_eq!(state.current_player(), Side::Side2);
        assert_eq!(state.remaining().pair(), (1, 1));

        // Without a board the same size is refused by validation.
        let small = DraughtsConfig::new().with_size(6);
        assert!(GameBuilder::new().config(small).build().is_err());
    }
}
