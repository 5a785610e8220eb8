//! Move selection.
//!
//! A strategy looks at a read-only view of the game and picks where the
//! given player should play. Returning `None` means the player has no legal
//! move and the caller must pass.

pub mod capture_max;
pub mod human;
pub mod random;

pub use capture_max::CaptureMax;
pub use human::{Human, LineSource};
pub use random::RandomMove;

use crate::board::{Coord, Player};
use crate::engine::GameView;

/// Picks moves for one player.
pub trait Strategy {
    /// Short name used in logs and game records.
    fn name(&self) -> &str;

    /// Chooses a legal placement for `player`, or `None` when there is none.
    fn choose_move(&mut self, game: &dyn GameView, player: Player) -> Option<Coord>;
}
