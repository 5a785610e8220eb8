//! The board: tile arena plus coordinate index.
//!
//! The board owns every tile. Tiles are never added, removed or moved after
//! construction; only their occupancy changes, and only through the engine.

use std::collections::HashMap;

use super::adjacency::{index_tiles, link};
use super::coord::Coord;
use super::player::Player;
use super::tile::{Occupancy, Tile, TileId};
use super::topology::{Direction, Topology};
use crate::error::GameError;

/// A playing surface of a given topology and size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    topology: Topology,
    size: i32,
    /// Slot 0 is the sentinel; playable tiles follow in coordinate order.
    tiles: Vec<Tile>,
    index: HashMap<Coord, TileId>,
}

impl Board {
    /// Builds a board with the standard opening position.
    pub fn new(topology: Topology, size: i32) -> Result<Self, GameError> {
        let mut board = Self::blank(topology, size)?;
        for (coord, player) in topology.opening(size) {
            let id = board.lookup(coord);
            board.set_occupancy(id, Occupancy::Occupied(player));
        }
        Ok(board)
    }

    /// Builds a board of the default size for the topology.
    pub fn with_default_size(topology: Topology) -> Self {
        // Default sizes always satisfy their own topology's rule.
        Self::new(topology, topology.default_size())
            .unwrap_or_else(|_| unreachable!("default size is valid"))
    }

    /// Builds a board on which every tile is open.
    pub fn blank(topology: Topology, size: i32) -> Result<Self, GameError> {
        if !topology.is_valid_size(size) {
            return Err(GameError::InvalidSize { topology, size });
        }
        let mut tiles = Vec::with_capacity(topology.tile_count(size) + 1);
        tiles.push(Tile::sentinel());
        tiles.extend(
            topology
                .coords(size)
                .into_iter()
                .map(|c| Tile::new(c, Occupancy::Open)),
        );
        let index = index_tiles(&tiles);
        link(&mut tiles, &index, topology);
        Ok(Board {
            topology,
            size,
            tiles,
            index,
        })
    }

    /// The board's topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The size parameter the board was built with.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of playable tiles.
    pub fn len(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Always false: every legal size has playable tiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All playable tiles, in coordinate order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles[1..]
    }

    /// Ids of all playable tiles, in coordinate order.
    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        (1..self.tiles.len()).map(|i| TileId(i as u32))
    }

    /// Ids of all open tiles, in coordinate order.
    pub fn open_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tile_ids().filter(|&id| self.tile(id).occupancy().is_open())
    }

    /// Returns the tile behind an id. The sentinel id, and any id that does
    /// not belong to this board, yields the sentinel tile.
    pub fn tile(&self, id: TileId) -> &Tile {
        self.tiles.get(id.index()).unwrap_or(&self.tiles[0])
    }

    /// Finds the tile at a coordinate, or the sentinel when it is off the board.
    pub fn lookup(&self, coord: Coord) -> TileId {
        self.index.get(&coord).copied().unwrap_or(TileId::SENTINEL)
    }

    /// Occupancy at a coordinate; `Empty` when off the board.
    pub fn occupancy(&self, coord: Coord) -> Occupancy {
        self.tile(self.lookup(coord)).occupancy()
    }

    /// The neighbor of `id` in `dir`, or the sentinel.
    #[inline]
    pub fn neighbor(&self, id: TileId, dir: Direction) -> TileId {
        self.tile(id).neighbor(dir)
    }

    /// Number of tiles holding `player`'s discs.
    pub fn count(&self, player: Player) -> usize {
        self.tiles()
            .iter()
            .filter(|t| t.occupancy() == Occupancy::Occupied(player))
            .count()
    }

    /// Sets a tile's occupancy. The sentinel and foreign ids are never modified.
    pub(crate) fn set_occupancy(&mut self, id: TileId, occupancy: Occupancy) {
        if id.is_sentinel() || occupancy == Occupancy::Empty {
            return;
        }
        if let Some(tile) = self.tiles.get_mut(id.index()) {
            tile.occupancy = occupancy;
        }
    }
}
