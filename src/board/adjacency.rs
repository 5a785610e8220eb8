//! Neighbor wiring for the tile graph.
//!
//! Wiring happens once, when a board is built: every tile gets one slot per
//! topology direction, pointing either at the on-board tile in that
//! direction or at the sentinel. The links never change afterwards, only
//! the occupancy of the tiles they point at.

use std::collections::HashMap;

use super::coord::Coord;
use super::tile::{Tile, TileId};
use super::topology::{Direction, Topology};

/// Builds the coordinate index for an arena whose slot 0 is the sentinel.
pub(crate) fn index_tiles(tiles: &[Tile]) -> HashMap<Coord, TileId> {
    tiles
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, t)| (t.coord(), TileId(i as u32)))
        .collect()
}

/// Fills every neighbor slot of every non-sentinel tile.
///
/// Directions that do not exist on the topology keep the sentinel, as do
/// directions leading off the board.
pub(crate) fn link(tiles: &mut [Tile], index: &HashMap<Coord, TileId>, topology: Topology) {
    for i in 1..tiles.len() {
        let coord = tiles[i].coord();
        for &dir in topology.directions() {
            let target = topology
                .offset(dir)
                .and_then(|off| index.get(&coord.offset(off)).copied())
                .unwrap_or(TileId::SENTINEL);
            tiles[i].neighbors[dir as usize] = target;
        }
    }
}

/// Returns the `(direction, neighbor)` pairs of a tile that lead to on-board tiles.
pub fn neighbors_of(tile: &Tile, topology: Topology) -> Vec<(Direction, TileId)> {
    topology
        .directions()
        .iter()
        .map(|&dir| (dir, tile.neighbor(dir)))
        .filter(|(_, id)| !id.is_sentinel())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::player::Player;
    use super::super::state::Board;
    use super::super::tile::Occupancy;
    use super::*;

    const BOARDS: [(Topology, i32); 6] = [
        (Topology::Hex, 3),
        (Topology::Hex, 6),
        (Topology::Hex, 10),
        (Topology::Square, 4),
        (Topology::Square, 8),
        (Topology::Square, 12),
    ];

    #[test]
    fn wiring_is_symmetric() {
        for (topo, size) in BOARDS {
            let board = Board::new(topo, size).unwrap();
            for id in board.tile_ids() {
                for &dir in topo.directions() {
                    let n = board.neighbor(id, dir);
                    if n.is_sentinel() {
                        continue;
                    }
                    assert_eq!(
                        board.neighbor(n, dir.opposite()),
                        id,
                        "{} size {}: {:?} from {}",
                        topo,
                        size,
                        dir,
                        board.tile(id).coord()
                    );
                }
            }
        }
    }

    #[test]
    fn no_self_adjacency() {
        for (topo, size) in BOARDS {
            let board = Board::new(topo, size).unwrap();
            for id in board.tile_ids() {
                for (_, n) in neighbors_of(board.tile(id), topo) {
                    assert_ne!(n, id);
                }
            }
        }
    }

    #[test]
    fn neighbors_match_offsets() {
        for (topo, size) in BOARDS {
            let board = Board::new(topo, size).unwrap();
            for id in board.tile_ids() {
                let coord = board.tile(id).coord();
                for &dir in topo.directions() {
                    let expected = board.lookup(coord.offset(topo.offset(dir).unwrap()));
                    assert_eq!(board.neighbor(id, dir), expected);
                }
            }
        }
    }

    #[test]
    fn hex_top_corner_links() {
        let board = Board::new(Topology::Hex, 6).unwrap();
        let corner = board.lookup(Coord::new(0, 0));
        let coord_of = |id: TileId| board.tile(id).coord();

        assert_eq!(coord_of(board.neighbor(corner, Direction::East)), Coord::new(1, 0));
        assert_eq!(coord_of(board.neighbor(corner, Direction::SouthWest)), Coord::new(0, 1));
        assert_eq!(coord_of(board.neighbor(corner, Direction::SouthEast)), Coord::new(1, 1));
        assert!(board.neighbor(corner, Direction::West).is_sentinel());
        assert!(board.neighbor(corner, Direction::NorthWest).is_sentinel());
        assert!(board.neighbor(corner, Direction::NorthEast).is_sentinel());
    }

    #[test]
    fn interior_tiles_have_full_neighborhoods() {
        let hex = Board::new(Topology::Hex, 6).unwrap();
        let center = hex.lookup(Coord::new(5, 5));
        assert_eq!(neighbors_of(hex.tile(center), Topology::Hex).len(), 6);

        let square = Board::new(Topology::Square, 8).unwrap();
        let inner = square.lookup(Coord::new(3, 3));
        assert_eq!(neighbors_of(square.tile(inner), Topology::Square).len(), 8);
        let corner = square.lookup(Coord::new(7, 7));
        assert_eq!(neighbors_of(square.tile(corner), Topology::Square).len(), 3);
    }

    #[test]
    fn hex_center_is_ringed_by_alternating_discs() {
        let board = Board::new(Topology::Hex, 6).unwrap();
        let center = board.lookup(Coord::new(5, 5));
        assert_eq!(board.tile(center).occupancy(), Occupancy::Open);
        for (dir, n) in neighbors_of(board.tile(center), Topology::Hex) {
            let owner = board.tile(n).occupancy().owner().unwrap();
            let across = board.neighbor(center, dir.opposite());
            let across_owner = board.tile(across).occupancy().owner().unwrap();
            assert_ne!(owner, across_owner, "{:?}", dir);
        }
        assert_eq!(board.count(Player::A), 3);
        assert_eq!(board.count(Player::B), 3);
    }
}
