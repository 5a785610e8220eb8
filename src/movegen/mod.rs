//! Legal move generation.
//!
//! Enumerates the tiles a player may play on, together with how many discs
//! each would capture.

use rand::Rng;

use crate::board::{Board, Coord, Player, TileId};
use crate::resolve::capture_count;

/// A legal placement and the number of discs it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub tile: TileId,
    pub coord: Coord,
    pub flips: usize,
}

/// Returns every legal move for `player`, in coordinate order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .open_tiles()
        .filter_map(|tile| {
            let flips = capture_count(board, tile, player);
            (flips > 0).then(|| Move {
                tile,
                coord: board.tile(tile).coord(),
                flips,
            })
        })
        .collect()
}

/// Returns whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .open_tiles()
        .any(|tile| capture_count(board, tile, player) > 0)
}

/// Picks a uniformly random legal move for `player`, or `None` if there is none.
pub fn random_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Move> {
    let legal = legal_moves(board, player);
    if legal.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..legal.len());
    Some(legal[idx])
}
