//! Sandwich-capture resolution.
//!
//! A disc placed on an open tile captures, in each direction independently,
//! the maximal run of consecutive opponent discs that is closed off by one
//! of the mover's own discs (the bracket). Runs that reach an open tile or
//! the board edge before a bracket capture nothing. The bracket itself is
//! never part of the capture.
//!
//! Everything here is read-only; applying a capture is the engine's job.

use crate::board::{Board, Coord, Direction, Occupancy, Player, TileId};

/// The opponent discs captured along one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub direction: Direction,
    /// Captured tiles, nearest first.
    pub tiles: Vec<TileId>,
}

/// All runs captured by one candidate move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    runs: Vec<Run>,
}

impl Captures {
    /// The non-empty runs, in topology direction order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Every captured tile. Rays from one tile never cross, so no tile
    /// appears twice.
    pub fn flipped(&self) -> impl Iterator<Item = TileId> + '_ {
        self.runs.iter().flat_map(|r| r.tiles.iter().copied())
    }

    /// Total number of captured tiles.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.tiles.len()).sum()
    }

    /// True when nothing is captured, i.e. the move is illegal.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// True when at least one direction captures.
    pub fn is_legal(&self) -> bool {
        !self.is_empty()
    }
}

/// Walks from `from` along `dir` over opponent discs, handing each one to
/// `visit`. Returns the run length when a `mover` disc closes it, else 0.
///
/// The walk is bounded by the number of tiles on the board, so it always
/// terminates even on a malformed graph.
fn walk(board: &Board, from: TileId, dir: Direction, mover: Player, mut visit: impl FnMut(TileId)) -> usize {
    let opponent = mover.opponent();
    let mut len = 0;
    let mut cur = board.neighbor(from, dir);

    for _ in 0..board.len() {
        match board.tile(cur).occupancy() {
            Occupancy::Occupied(p) if p == opponent => {
                visit(cur);
                len += 1;
                cur = board.neighbor(cur, dir);
            }
            Occupancy::Occupied(_) => return len,
            Occupancy::Open | Occupancy::Empty => return 0,
        }
    }
    0
}

/// Returns the run `mover` would capture from `from` along `dir`, if any.
pub fn run_in_direction(board: &Board, from: TileId, dir: Direction, mover: Player) -> Option<Vec<TileId>> {
    let mut run = Vec::new();
    match walk(board, from, dir, mover, |id| run.push(id)) {
        0 => None,
        _ => Some(run),
    }
}

/// Counts the discs a run in `dir` would capture without allocating.
fn run_length(board: &Board, from: TileId, dir: Direction, mover: Player) -> usize {
    walk(board, from, dir, mover, |_| {})
}

/// Computes every run `mover` would capture by playing on `at`.
///
/// Returns an empty result when `at` is not an open tile.
pub fn captures(board: &Board, at: TileId, mover: Player) -> Captures {
    if !board.tile(at).occupancy().is_open() {
        return Captures::default();
    }
    let runs = board
        .topology()
        .directions()
        .iter()
        .filter_map(|&dir| {
            run_in_direction(board, at, dir, mover).map(|tiles| Run {
                direction: dir,
                tiles,
            })
        })
        .collect();
    Captures { runs }
}

/// Coordinate-based convenience wrapper around [`captures`].
pub fn captures_at(board: &Board, at: Coord, mover: Player) -> Captures {
    captures(board, board.lookup(at), mover)
}

/// Number of discs `mover` would capture on `at`; 0 when illegal.
pub fn capture_count(board: &Board, at: TileId, mover: Player) -> usize {
    if !board.tile(at).occupancy().is_open() {
        return 0;
    }
    board
        .topology()
        .directions()
        .iter()
        .map(|&dir| run_length(board, at, dir, mover))
        .sum()
}

/// Returns whether `mover` may play on `at`.
pub fn is_legal(board: &Board, at: TileId, mover: Player) -> bool {
    if !board.tile(at).occupancy().is_open() {
        return false;
    }
    board
        .topology()
        .directions()
        .iter()
        .any(|&dir| run_length(board, at, dir, mover) > 0)
}
