//! Board representation.
//!
//! Contains the tile graph (an arena of tiles linked by index), the two
//! supported topologies, coordinates, and players.

pub mod adjacency;
pub mod coord;
pub mod player;
pub mod state;
pub mod tile;
pub mod topology;

pub use adjacency::neighbors_of;
pub use coord::{Coord, ParseCoordError};
pub use player::{Color, Player, ALL_PLAYERS};
pub use state::Board;
pub use tile::{Occupancy, Tile, TileId};
pub use topology::{
    Direction, Topology, DIRECTION_COUNT, HEX_DIRECTIONS, MAX_SIZE, SQUARE_DIRECTIONS,
};
