//! Reversi in the terminal.
//!
//! Plays one game between two participants and prints the board after every
//! ply. Human participants type `x y` coordinates on stdin. Logs go to stderr
//! and are filtered with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi::board::{Player, Topology};
use reversi::config::GameConfig;
use reversi::engine::{Game, GameView};
use reversi::protocol::{render, render_hints};
use reversi::selfplay::{play_game_with_callback, EndReason, Participant, Ply};

/// Play reversi on a hexagonal or square board.
#[derive(Parser, Debug)]
#[command(name = "reversi", version, about, long_about = None)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board shape: hex or square
    #[arg(long)]
    topology: Option<Topology>,

    /// Board side length
    #[arg(long)]
    size: Option<i32>,

    /// Player A (X, moves first): human, capture-max or random
    #[arg(long)]
    a: Option<Participant>,

    /// Player B (O): human, capture-max or random
    #[arg(long)]
    b: Option<Participant>,

    /// Seed for random participants
    #[arg(long)]
    seed: Option<u64>,

    /// Mark the legal moves of the player to move with '*'
    #[arg(long)]
    hints: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<usize>,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(topology) = self.topology {
            if self.size.is_none() && topology != config.topology {
                config.size = None;
            }
            config.topology = topology;
        }
        if let Some(size) = self.size {
            config.size = Some(size);
        }
        if let Some(a) = self.a {
            config.a = a;
        }
        if let Some(b) = self.b {
            config.b = b;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max_plies) = self.max_plies {
            config.selfplay.max_plies = max_plies;
        }
        config.hints |= self.hints;
        config.validate()?;
        Ok(config)
    }
}

fn print_board(game: &Game, hints: bool) {
    match (hints, game.turn()) {
        (true, Some(player)) => print!("{}", render_hints(game.board(), player)),
        _ => print!("{}", render(game.board())),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    info!(
        topology = %config.topology,
        size = config.board_size(),
        a = %config.a,
        b = %config.b,
        "new game"
    );

    let mut game = Game::new(config.topology, config.board_size())?;
    let mut a = config.a.strategy(config.seed);
    let mut b = config.b.strategy(!config.seed);

    game.start()?;
    print_board(&game, config.hints);
    let hints = config.hints;
    let record = play_game_with_callback(
        &mut game,
        a.as_mut(),
        b.as_mut(),
        config.selfplay.max_plies,
        |game, ply| {
            match ply {
                Ply::Move { player, coord, flipped } => {
                    println!("{player} plays {coord}, flipping {}", flipped.len())
                }
                Ply::Pass { player } => println!("{player} passes"),
            }
            print_board(game, hints);
        },
    )?;

    match record.end {
        EndReason::GameOver => println!("Game over."),
        EndReason::PlyLimit => println!("Stopped after {} plies.", record.plies.len()),
        EndReason::Abandoned => println!("Game abandoned."),
    }
    println!(
        "Final score: {} {} - {} {}",
        Player::A,
        record.score_a,
        Player::B,
        record.score_b
    );
    match record.winner {
        Some(player) => println!("Winner: {player}"),
        None => println!("Tie"),
    }
    Ok(())
}
