//! Uniformly random legal moves.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::trace;

use crate::board::{Coord, Player};
use crate::engine::GameView;
use crate::movegen::random_move;

use super::Strategy;

/// Plays a uniformly random legal move. Reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct RandomMove {
    rng: SmallRng,
}

impl RandomMove {
    pub fn new(seed: u64) -> Self {
        RandomMove {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &dyn GameView, player: Player) -> Option<Coord> {
        let mv = random_move(game.board(), player, &mut self.rng)?;
        trace!(%player, at = %mv.coord, flips = mv.flips, "random pick");
        Some(mv.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Topology;
    use crate::engine::Game;

    #[test]
    fn same_seed_same_game() {
        let play = |seed: u64| {
            let mut game = Game::with_defaults(Topology::Hex);
            game.start().unwrap();
            let mut strategy = RandomMove::new(seed);
            let mut moves = Vec::new();
            for _ in 0..10 {
                let player = game.turn().unwrap();
                match strategy.choose_move(&game, player) {
                    Some(coord) => {
                        game.make_move(player, coord).unwrap();
                        moves.push(coord);
                    }
                    None => break,
                }
            }
            moves
        };
        assert_eq!(play(42), play(42));
        assert!(!play(42).is_empty());
    }

    #[test]
    fn picks_are_legal() {
        let mut game = Game::with_defaults(Topology::Square);
        game.start().unwrap();
        let mut strategy = RandomMove::new(1);
        for _ in 0..16 {
            let coord = strategy.choose_move(&game, Player::A).unwrap();
            assert!(game.potential_captures(coord) > 0);
        }
    }
}
