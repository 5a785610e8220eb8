//! End-to-end engine scenarios on both board shapes.

use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use reversi::board::{neighbors_of, Board, Coord, Occupancy, Player, Topology, MAX_SIZE};
use reversi::engine::{Game, GameView};
use reversi::error::GameError;
use reversi::movegen::{legal_moves, random_move};
use reversi::observer::{Event, EventLog};
use reversi::protocol::{parse, render};
use reversi::resolve::captures_at;

/// Flips computed by walking raw coordinates, independent of the tile links.
fn naive_flips(board: &Board, at: Coord, mover: Player) -> Vec<Coord> {
    let topology = board.topology();
    let mut flipped = Vec::new();
    for &dir in topology.directions() {
        let Some(step) = topology.offset(dir) else {
            continue;
        };
        let mut run = Vec::new();
        let mut cur = at.offset(step);
        loop {
            match board.occupancy(cur) {
                Occupancy::Occupied(p) if p == mover.opponent() => run.push(cur),
                Occupancy::Occupied(_) => {
                    flipped.extend(run);
                    break;
                }
                _ => break,
            }
            cur = cur.offset(step);
        }
    }
    flipped.sort();
    flipped
}

#[test]
fn neighbor_links_are_symmetric() {
    for (topology, size) in [
        (Topology::Hex, 3),
        (Topology::Hex, 6),
        (Topology::Hex, 10),
        (Topology::Square, 4),
        (Topology::Square, 8),
        (Topology::Square, 12),
    ] {
        let board = Board::new(topology, size).unwrap();
        for id in board.tile_ids() {
            for (dir, other) in neighbors_of(board.tile(id), topology) {
                assert_eq!(
                    board.neighbor(other, dir.opposite()),
                    id,
                    "{topology} {size}: {} -> {dir:?}",
                    board.tile(id).coord()
                );
            }
        }
    }
}

#[test]
fn flips_match_a_coordinate_walk_during_random_games() {
    for (topology, seed) in [(Topology::Hex, 1), (Topology::Hex, 2), (Topology::Square, 3)] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::with_defaults(topology);
        game.start().unwrap();
        for _ in 0..200 {
            if game.is_game_over().unwrap() {
                break;
            }
            let player = game.turn().unwrap();
            // Every open tile agrees with the naive walk, legal or not.
            for id in game.board().open_tiles() {
                let coord = game.board().tile(id).coord();
                let mut engine: Vec<Coord> = captures_at(game.board(), coord, player)
                    .flipped()
                    .map(|t| game.board().tile(t).coord())
                    .collect();
                engine.sort();
                assert_eq!(engine, naive_flips(game.board(), coord, player));
            }
            match random_move(game.board(), player, &mut rng) {
                Some(mv) => {
                    let expected = naive_flips(game.board(), mv.coord, player);
                    let mut outcome = game.make_move(player, mv.coord).unwrap().flipped;
                    outcome.sort();
                    assert_eq!(outcome, expected);
                }
                None => game.pass(player).unwrap(),
            }
        }
    }
}

#[test]
fn hex_default_scenario() {
    let mut game = Game::with_defaults(Topology::Hex);
    game.start().unwrap();
    let outcome = game.make_move(Player::A, Coord::new(3, 4)).unwrap();
    assert_eq!(outcome.flipped, vec![Coord::new(4, 5)]);
    assert_eq!(game.score(Player::A), Ok(5));
    assert_eq!(game.score(Player::B), Ok(2));
}

#[test]
fn square_default_scenario() {
    let mut game = Game::with_defaults(Topology::Square);
    game.start().unwrap();
    assert_eq!(game.score(Player::A), Ok(2));
    assert_eq!(game.score(Player::B), Ok(2));
    let outcome = game.make_move(Player::A, Coord::new(2, 4)).unwrap();
    assert_eq!(outcome.flipped, vec![Coord::new(3, 4)]);
    assert_eq!(game.score(Player::A), Ok(4));
    assert_eq!(game.score(Player::B), Ok(1));
}

#[test]
fn score_delta_rule_holds_for_every_move() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut game = Game::with_defaults(Topology::Hex);
    game.start().unwrap();
    while !game.is_game_over().unwrap() {
        let player = game.turn().unwrap();
        let before = (game.score(player).unwrap(), game.score(player.opponent()).unwrap());
        match random_move(game.board(), player, &mut rng) {
            Some(mv) => {
                let n = game.make_move(player, mv.coord).unwrap().flipped.len();
                assert_eq!(n, mv.flips);
                assert_eq!(game.score(player).unwrap(), before.0 + 1 + n);
                assert_eq!(game.score(player.opponent()).unwrap(), before.1 - n);
            }
            None => game.pass(player).unwrap(),
        }
    }
}

#[test]
fn failed_moves_leave_everything_untouched() {
    let log = Rc::new(EventLog::new());
    let mut game = Game::with_defaults(Topology::Square);
    game.add_observer(log.clone());
    game.start().unwrap();
    game.make_move(Player::A, Coord::new(2, 4)).unwrap();
    log.clear();
    let before = render(game.board());

    let attempts = [
        (Player::A, Coord::new(2, 3)),
        (Player::B, Coord::new(3, 3)),
        (Player::B, Coord::new(8, 0)),
        (Player::B, Coord::new(0, 0)),
    ];
    for (player, coord) in attempts {
        assert!(game.make_move(player, coord).is_err());
    }
    assert_eq!(render(game.board()), before);
    assert_eq!(game.turn(), Some(Player::B));
    assert!(log.events().is_empty());

    game.make_move(Player::B, Coord::new(2, 5)).unwrap();
    assert_eq!(log.events(), vec![Event::BoardChanged, Event::TurnChanged(Player::A)]);
}

#[test]
fn game_over_tracks_capture_availability() {
    let over = |text: &str| {
        let mut game = Game::from_board(parse(Topology::Square, text).unwrap());
        game.start().unwrap();
        game.is_game_over().unwrap()
    };
    assert!(!over("_ _ _ _\n_ X O _\n_ O X _\n_ _ _ _\n"));
    assert!(over("X X X X\nX X X X\nO O O O\nO O O O\n"));
    assert!(over("X X _ _\nX X _ _\n_ _ _ _\n_ _ _ _\n"));
    // Only B can move here, which still keeps the game going.
    assert!(!over("O X _ _\n_ _ _ _\n_ _ _ _\n_ _ _ _\n"));
}

#[test]
fn invalid_sizes_are_rejected() {
    for size in [-2, 0, 2, 3, 7] {
        assert!(matches!(
            Game::new(Topology::Square, size),
            Err(GameError::InvalidSize { .. })
        ));
    }
    for size in [-1, 0, 1, 2] {
        assert!(matches!(Game::new(Topology::Hex, size), Err(GameError::InvalidSize { .. })));
    }
    for (topology, size) in [
        (Topology::Square, 50_000),
        (Topology::Hex, i32::MAX),
        (Topology::Square, MAX_SIZE + 2),
    ] {
        assert_eq!(
            Game::new(topology, size).err(),
            Some(GameError::InvalidSize { topology, size })
        );
    }
    assert!(Game::new(Topology::Hex, 10).is_ok());
    assert!(Game::new(Topology::Square, 4).is_ok());
}

#[test]
fn legal_moves_agree_with_potential_captures() {
    let mut game = Game::with_defaults(Topology::Hex);
    game.start().unwrap();
    let moves = legal_moves(game.board(), Player::A);
    for tile in game.board().tiles() {
        let expected = moves
            .iter()
            .find(|m| m.coord == tile.coord())
            .map_or(0, |m| m.flips);
        assert_eq!(game.potential_captures(tile.coord()), expected);
    }
}

#[test]
fn tile_counts_by_size() {
    for (size, tiles) in [(3, 19), (6, 91), (10, 271)] {
        assert_eq!(Board::new(Topology::Hex, size).unwrap().len(), tiles);
    }
    assert_eq!(Board::new(Topology::Square, 8).unwrap().len(), 64);
}

#[test]
fn render_parse_roundtrip_mid_game() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = Game::with_defaults(Topology::Hex);
    game.start().unwrap();
    for _ in 0..12 {
        let player = game.turn().unwrap();
        match random_move(game.board(), player, &mut rng) {
            Some(mv) => {
                game.make_move(player, mv.coord).unwrap();
            }
            None => game.pass(player).unwrap(),
        }
    }
    let parsed = parse(Topology::Hex, &render(game.board())).unwrap();
    assert_eq!(&parsed, game.board());
}
