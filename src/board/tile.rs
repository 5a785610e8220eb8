//! Tiles and their occupancy.
//!
//! Tiles live in a single arena owned by the board and refer to each other
//! through `TileId` indices. Slot 0 of the arena is the `Empty` sentinel that
//! stands in for everything off the board.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;
use super::topology::{Direction, DIRECTION_COUNT};

/// Index of a tile in the board arena.
///
/// Ids are only meaningful on the board that issued them; a board treats an
/// id it did not issue as the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) u32);

impl TileId {
    /// The off-board sentinel.
    pub const SENTINEL: TileId = TileId(0);

    /// Returns whether this id refers to the sentinel.
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a tile currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    /// Outside the playable board. Only the sentinel carries this.
    Empty,
    /// On the board, no disc.
    Open,
    /// On the board, holding the given player's disc.
    Occupied(Player),
}

impl Occupancy {
    /// Returns the owner when the tile holds a disc.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Occupancy::Occupied(p) => Some(p),
            Occupancy::Empty | Occupancy::Open => None,
        }
    }

    /// Returns whether a disc may be placed here.
    pub const fn is_open(self) -> bool {
        matches!(self, Occupancy::Open)
    }
}

/// One node of the tile graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    coord: Coord,
    pub(crate) occupancy: Occupancy,
    pub(crate) neighbors: [TileId; DIRECTION_COUNT],
}

impl Tile {
    pub(crate) fn new(coord: Coord, occupancy: Occupancy) -> Self {
        Tile {
            coord,
            occupancy,
            neighbors: [TileId::SENTINEL; DIRECTION_COUNT],
        }
    }

    /// The sentinel tile. Its coordinate is `(-1, -1)`, which is never on a board.
    pub(crate) fn sentinel() -> Self {
        Tile::new(Coord::new(-1, -1), Occupancy::Empty)
    }

    /// The tile's coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The tile's current occupancy.
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// The neighbor in `dir`, or the sentinel.
    pub fn neighbor(&self, dir: Direction) -> TileId {
        self.neighbors[dir as usize]
    }
}
