//! Board topologies and neighbor directions.
//!
//! A topology fixes three things: which directions a tile has neighbors in,
//! the coordinate offset of each direction, and which sizes are legal. Both
//! shapes share one `Direction` enum; the hex shape simply has no `North` or
//! `South` neighbor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;

/// Number of `Direction` variants, and so the number of neighbor slots per tile.
pub const DIRECTION_COUNT: usize = 8;

/// Largest side length either topology accepts. Keeps tile counts and
/// coordinate extents well inside `i32`.
pub const MAX_SIZE: i32 = 1024;

/// A neighbor direction. `y` grows downward, so `North` is up the screen.
///
/// The `#[repr(u8)]` attribute enables use as a neighbor-slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    West = 1,
    NorthEast = 2,
    NorthWest = 3,
    SouthEast = 4,
    SouthWest = 5,
    North = 6,
    South = 7,
}

/// The six hex directions, in slot order.
pub const HEX_DIRECTIONS: [Direction; 6] = [
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// The eight square directions, in slot order.
pub const SQUARE_DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::North,
    Direction::South,
];

impl Direction {
    /// Returns the direction pointing back the way this one came.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

/// The shape of the playing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Hexagonal board; `size` is the side length.
    Hex,
    /// Square board; `size` is the side length.
    Square,
}

impl Topology {
    /// Returns the directions tiles on this topology have neighbors in.
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Topology::Hex => &HEX_DIRECTIONS,
            Topology::Square => &SQUARE_DIRECTIONS,
        }
    }

    /// Returns the coordinate offset of a direction, or `None` when the
    /// direction does not exist on this topology.
    ///
    /// Hex tiles use the diagonal/row system: a row shifts half a tile right
    /// for every row below the middle, so "north-east" keeps `x` and
    /// "south-west" keeps `x` as well.
    pub const fn offset(self, dir: Direction) -> Option<(i32, i32)> {
        match self {
            Topology::Hex => match dir {
                Direction::East => Some((1, 0)),
                Direction::West => Some((-1, 0)),
                Direction::NorthEast => Some((0, -1)),
                Direction::NorthWest => Some((-1, -1)),
                Direction::SouthEast => Some((1, 1)),
                Direction::SouthWest => Some((0, 1)),
                Direction::North | Direction::South => None,
            },
            Topology::Square => match dir {
                Direction::East => Some((1, 0)),
                Direction::West => Some((-1, 0)),
                Direction::NorthEast => Some((1, -1)),
                Direction::NorthWest => Some((-1, -1)),
                Direction::SouthEast => Some((1, 1)),
                Direction::SouthWest => Some((-1, 1)),
                Direction::North => Some((0, -1)),
                Direction::South => Some((0, 1)),
            },
        }
    }

    /// The board size used when none is given.
    pub const fn default_size(self) -> i32 {
        match self {
            Topology::Hex => 6,
            Topology::Square => 8,
        }
    }

    /// Returns whether `size` is legal for this topology.
    ///
    /// Hex boards need a side length of at least 3. Square boards need an
    /// even side length of at least 4. Neither may exceed `MAX_SIZE`.
    pub const fn is_valid_size(self, size: i32) -> bool {
        if size > MAX_SIZE {
            return false;
        }
        match self {
            Topology::Hex => size >= 3,
            Topology::Square => size >= 4 && size % 2 == 0,
        }
    }

    /// Number of rows (and of columns) in the native coordinate box.
    pub const fn extent(self, size: i32) -> i32 {
        match self {
            Topology::Hex => 2 * size - 1,
            Topology::Square => size,
        }
    }

    /// Number of playable tiles on a board of the given size.
    pub const fn tile_count(self, size: i32) -> usize {
        match self {
            Topology::Hex => (3 * size * (size - 1) + 1) as usize,
            Topology::Square => (size * size) as usize,
        }
    }

    /// Returns whether `coord` lies on a board of the given size.
    pub const fn contains(self, size: i32, coord: Coord) -> bool {
        let extent = self.extent(size);
        if coord.x < 0 || coord.y < 0 || coord.x >= extent || coord.y >= extent {
            return false;
        }
        match self {
            Topology::Hex => (coord.x - coord.y).abs() <= size - 1,
            Topology::Square => true,
        }
    }

    /// Returns every on-board coordinate in board order (x, then y).
    pub fn coords(self, size: i32) -> Vec<Coord> {
        let extent = self.extent(size);
        let mut coords = Vec::with_capacity(self.tile_count(size));
        for x in 0..extent {
            for y in 0..extent {
                let c = Coord::new(x, y);
                if self.contains(size, c) {
                    coords.push(c);
                }
            }
        }
        coords
    }

    /// Returns the pre-placed discs of the opening position.
    ///
    /// Each player's discs sit on one diagonal of the center cluster. On hex
    /// boards the cluster is the ring around the (open) center tile.
    pub fn opening(self, size: i32) -> Vec<(Coord, Player)> {
        match self {
            Topology::Hex => {
                let c = size - 1;
                vec![
                    (Coord::new(c - 1, c - 1), Player::A),
                    (Coord::new(c, c - 1), Player::B),
                    (Coord::new(c - 1, c), Player::B),
                    (Coord::new(c + 1, c), Player::A),
                    (Coord::new(c, c + 1), Player::A),
                    (Coord::new(c + 1, c + 1), Player::B),
                ]
            }
            Topology::Square => {
                let h = size / 2;
                vec![
                    (Coord::new(h - 1, h - 1), Player::A),
                    (Coord::new(h, h - 1), Player::B),
                    (Coord::new(h - 1, h), Player::B),
                    (Coord::new(h, h), Player::A),
                ]
            }
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Hex => write!(f, "hex"),
            Topology::Square => write!(f, "square"),
        }
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "hexagon" | "original" => Ok(Topology::Hex),
            "square" | "othello" => Ok(Topology::Square),
            other => Err(format!("unknown topology '{}' (expected hex or square)", other)),
        }
    }
}
