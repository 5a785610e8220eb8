//! Game observers.
//!
//! Observers are told, synchronously and in registration order, when the
//! board changes and when the turn passes. They run on the caller's thread
//! in the middle of a mutating engine call and must not call back into the
//! engine's mutating operations.

use std::cell::RefCell;

use crate::board::Player;

/// Receives change notifications from a `Game`.
pub trait GameObserver {
    /// Discs were placed or flipped.
    fn on_board_changed(&self);

    /// It is now `turn`'s move.
    fn on_turn_changed(&self, turn: Player);
}

/// An observer that records every notification, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<Event>>,
}

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    BoardChanged,
    TurnChanged(Player),
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Discards recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_board_changed(&self) {
        self.events.borrow_mut().push(Event::BoardChanged);
    }

    fn on_turn_changed(&self, turn: Player) {
        self.events.borrow_mut().push(Event::TurnChanged(turn));
    }
}
