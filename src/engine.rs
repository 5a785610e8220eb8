//! Game state machine.
//!
//! Owns the board, tracks whose turn it is, validates and applies moves
//! through the capture resolver, and notifies observers. Game-over is a
//! query recomputed from the board on every call; the game never leaves
//! `InProgress` on its own and never passes on a player's behalf.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::board::{Board, Coord, Occupancy, Player, Topology};
use crate::error::GameError;
use crate::movegen::has_legal_move;
use crate::observer::GameObserver;
use crate::resolve::{capture_count, captures};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    InProgress,
}

/// What a successful move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub placed: Coord,
    /// Flipped coordinates, grouped by direction, nearest first.
    pub flipped: Vec<Coord>,
}

/// Read-only access to a game, handed to strategies and views.
pub trait GameView {
    /// The board in its current state.
    fn board(&self) -> &Board;

    /// The lifecycle phase.
    fn phase(&self) -> Phase;

    /// Whether `start` has been called.
    fn is_started(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    /// The player to move; `None` before the game starts.
    fn turn(&self) -> Option<Player>;

    /// Number of discs `player` owns.
    fn score(&self, player: Player) -> Result<usize, GameError>;

    /// Whether neither player can capture anywhere.
    fn is_game_over(&self) -> Result<bool, GameError>;

    /// Discs the player to move would flip by playing on `coord`; 0 when
    /// illegal or before the game starts.
    fn potential_captures(&self, coord: Coord) -> usize;
}

/// A two-player game on one board.
pub struct Game {
    board: Board,
    phase: Phase,
    turn: Player,
    observers: Vec<Rc<dyn GameObserver>>,
}

impl Game {
    /// Creates an unstarted game on a fresh board.
    pub fn new(topology: Topology, size: i32) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(topology, size)?))
    }

    /// Creates an unstarted game on a default-size board.
    pub fn with_defaults(topology: Topology) -> Self {
        Self::from_board(Board::with_default_size(topology))
    }

    /// Creates an unstarted game on an existing position.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            phase: Phase::NotStarted,
            turn: Player::FIRST,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Rc<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Starts the game: `A` moves first.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            return Err(GameError::AlreadyStarted);
        }
        self.phase = Phase::InProgress;
        self.turn = Player::FIRST;
        debug!(topology = %self.board.topology(), size = self.board.size(), "game started");
        self.notify_turn_changed();
        Ok(())
    }

    /// Places `player`'s disc on `coord` and flips everything it captures.
    ///
    /// On any error the board and the turn are left untouched.
    pub fn make_move(&mut self, player: Player, coord: Coord) -> Result<MoveOutcome, GameError> {
        self.expect_turn(player)?;

        let at = self.board.lookup(coord);
        if !self.board.tile(at).occupancy().is_open() {
            return Err(GameError::OccupiedOrInvalidTile(coord));
        }
        let caps = captures(&self.board, at, player);
        if caps.is_empty() {
            return Err(GameError::NoLegalCapture(coord));
        }

        let flipped: Vec<Coord> = caps.flipped().map(|id| self.board.tile(id).coord()).collect();
        self.board.set_occupancy(at, Occupancy::Occupied(player));
        for id in caps.flipped() {
            self.board.set_occupancy(id, Occupancy::Occupied(player));
        }
        debug!(%player, at = %coord, flipped = flipped.len(), "move applied");
        self.notify_board_changed();

        self.turn = player.opponent();
        self.notify_turn_changed();

        Ok(MoveOutcome {
            player,
            placed: coord,
            flipped,
        })
    }

    /// Gives the turn away. Only allowed when `player` has no legal move.
    pub fn pass(&mut self, player: Player) -> Result<(), GameError> {
        self.expect_turn(player)?;
        if has_legal_move(&self.board, player) {
            return Err(GameError::MustPlay(player));
        }
        debug!(%player, "pass");
        self.turn = player.opponent();
        self.notify_turn_changed();
        Ok(())
    }

    /// The player with more discs, or `None` on a tie.
    ///
    /// This does not check whether the game is over.
    pub fn winner(&self) -> Result<Option<Player>, GameError> {
        let a = self.score(Player::A)?;
        let b = self.score(Player::B)?;
        Ok(match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        })
    }

    fn require_started(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::NotStarted => Err(GameError::NotStarted),
        }
    }

    fn expect_turn(&self, player: Player) -> Result<(), GameError> {
        self.require_started()?;
        if player != self.turn {
            return Err(GameError::WrongTurn {
                expected: self.turn,
                got: player,
            });
        }
        Ok(())
    }

    fn notify_board_changed(&self) {
        for observer in &self.observers {
            observer.on_board_changed();
        }
    }

    fn notify_turn_changed(&self) {
        for observer in &self.observers {
            observer.on_turn_changed(self.turn);
        }
    }
}

impl GameView for Game {
    fn board(&self) -> &Board {
        &self.board
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn turn(&self) -> Option<Player> {
        match self.phase {
            Phase::InProgress => Some(self.turn),
            Phase::NotStarted => None,
        }
    }

    fn score(&self, player: Player) -> Result<usize, GameError> {
        self.require_started()?;
        Ok(self.board.count(player))
    }

    fn is_game_over(&self) -> Result<bool, GameError> {
        self.require_started()?;
        Ok(!has_legal_move(&self.board, Player::A) && !has_legal_move(&self.board, Player::B))
    }

    fn potential_captures(&self, coord: Coord) -> usize {
        match self.turn() {
            Some(player) => capture_count(&self.board, self.board.lookup(coord), player),
            None => 0,
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("topology", &self.board.topology())
            .field("size", &self.board.size())
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("observers", &self.observers.len())
            .finish()
    }
}
