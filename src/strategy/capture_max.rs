//! Greedy capture strategy.

use tracing::trace;

use crate::board::{Coord, Player};
use crate::engine::GameView;
use crate::resolve::capture_count;

use super::Strategy;

/// Plays wherever the most discs flip. Ties go to the smallest coordinate,
/// ordered by `x` then `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureMax;

impl CaptureMax {
    pub fn new() -> Self {
        CaptureMax
    }
}

impl Strategy for CaptureMax {
    fn name(&self) -> &str {
        "capture-max"
    }

    fn choose_move(&mut self, game: &dyn GameView, player: Player) -> Option<Coord> {
        let board = game.board();
        let mut best: Option<(usize, Coord)> = None;
        for tile in board.open_tiles() {
            let flips = capture_count(board, tile, player);
            if flips == 0 {
                continue;
            }
            let coord = board.tile(tile).coord();
            trace!(%player, at = %coord, flips, "candidate");
            let better = match best {
                None => true,
                Some((best_flips, best_coord)) => {
                    flips > best_flips || (flips == best_flips && coord < best_coord)
                }
            };
            if better {
                best = Some((flips, coord));
            }
        }
        best.map(|(_, coord)| coord)
    }
}
