//! Game driver and batch self-play.
//!
//! `play_game` runs one game between two strategies: it asks the player to
//! move for a placement, passes when the strategy has none, and stops when
//! neither player can capture or a ply limit is hit. `run_batch` plays many
//! machine-only games concurrently and returns their records, which can be
//! written out as JSONL.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Coord, Player, Topology};
use crate::config::GameConfig;
use crate::engine::{Game, GameView};
use crate::error::{ConfigError, GameError, SelfPlayError};
use crate::strategy::{CaptureMax, Human, RandomMove, Strategy};

/// Who sits in a player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Participant {
    /// Moves typed on stdin.
    Human,
    /// The greedy capture strategy.
    CaptureMax,
    /// Uniformly random legal moves.
    Random,
}

impl Participant {
    /// Builds the strategy for this seat. `seed` only matters for `Random`.
    pub fn strategy(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Participant::Human => Box::new(Human::stdio()),
            Participant::CaptureMax => Box::new(CaptureMax::new()),
            Participant::Random => Box::new(RandomMove::new(seed)),
        }
    }

    /// Whether the seat needs no terminal.
    pub fn is_machine(self) -> bool {
        !matches!(self, Participant::Human)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Participant::Human => "human",
            Participant::CaptureMax => "capture-max",
            Participant::Random => "random",
        })
    }
}

impl FromStr for Participant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Participant::Human),
            "capture-max" | "capturemax" | "greedy" => Ok(Participant::CaptureMax),
            "random" => Ok(Participant::Random),
            other => Err(format!(
                "unknown participant '{other}' (expected human, capture-max or random)"
            )),
        }
    }
}

/// One turn of a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ply {
    Move {
        player: Player,
        coord: Coord,
        flipped: Vec<Coord>,
    },
    Pass {
        player: Player,
    },
}

impl Ply {
    pub fn player(&self) -> Player {
        match self {
            Ply::Move { player, .. } | Ply::Pass { player } => *player,
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// Neither player can capture.
    GameOver,
    /// The ply limit was reached first.
    PlyLimit,
    /// A strategy gave no move while one existed, e.g. a human closed stdin.
    Abandoned,
}

/// A complete game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID within a batch; 0 for a single game.
    pub game_id: usize,
    /// Seed of the game's random participants, when it came from a batch.
    pub seed: Option<u64>,
    pub topology: Topology,
    pub size: i32,
    /// Strategy names for A and B.
    pub a: String,
    pub b: String,
    pub plies: Vec<Ply>,
    pub score_a: usize,
    pub score_b: usize,
    /// `None` on a tie.
    pub winner: Option<Player>,
    pub end: EndReason,
}

/// Plays `game` to the end between `a` and `b`.
pub fn play_game(
    game: &mut Game,
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    max_plies: usize,
) -> Result<GameRecord, GameError> {
    play_game_with_callback(game, a, b, max_plies, |_, _| {})
}

/// Plays `game` to the end, calling `on_ply` after every move or pass.
///
/// Starts the game if it has not been started. Stops when neither player
/// can capture, after `max_plies` plies, or when a strategy declines to move
/// while it still has a legal move.
pub fn play_game_with_callback<F>(
    game: &mut Game,
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    max_plies: usize,
    mut on_ply: F,
) -> Result<GameRecord, GameError>
where
    F: FnMut(&Game, &Ply),
{
    if !game.is_started() {
        game.start()?;
    }
    let mut plies = Vec::new();
    let end = loop {
        if game.is_game_over()? {
            break EndReason::GameOver;
        }
        if plies.len() >= max_plies {
            break EndReason::PlyLimit;
        }
        let player = game.turn().ok_or(GameError::NotStarted)?;
        let strategy: &mut dyn Strategy = match player {
            Player::A => &mut *a,
            Player::B => &mut *b,
        };
        let ply = match strategy.choose_move(&*game, player) {
            Some(coord) => {
                let outcome = game.make_move(player, coord)?;
                Ply::Move {
                    player,
                    coord,
                    flipped: outcome.flipped,
                }
            }
            None => match game.pass(player) {
                Ok(()) => Ply::Pass { player },
                Err(GameError::MustPlay(_)) => {
                    debug!(%player, strategy = strategy.name(), "no move offered, abandoning");
                    break EndReason::Abandoned;
                }
                Err(e) => return Err(e),
            },
        };
        on_ply(game, &ply);
        plies.push(ply);
    };

    Ok(GameRecord {
        game_id: 0,
        seed: None,
        topology: game.board().topology(),
        size: game.board().size(),
        a: a.name().to_string(),
        b: b.name().to_string(),
        plies,
        score_a: game.score(Player::A)?,
        score_b: game.score(Player::B)?,
        winner: game.winner()?,
        end,
    })
}

/// Plays game `game_id` of a batch with seed `config.seed + game_id`.
fn play_seeded(config: &GameConfig, game_id: usize) -> Result<GameRecord, SelfPlayError> {
    let seed = config.seed.wrapping_add(game_id as u64);
    let mut a = config.a.strategy(seed);
    let mut b = config.b.strategy(!seed);
    let mut game = Game::new(config.topology, config.board_size())
        .map_err(|source| SelfPlayError::Game { game_id, source })?;
    let mut record = play_game(&mut game, a.as_mut(), b.as_mut(), config.selfplay.max_plies)
        .map_err(|source| SelfPlayError::Game { game_id, source })?;
    record.game_id = game_id;
    record.seed = Some(seed);
    Ok(record)
}

fn check_batch_config(config: &GameConfig) -> Result<(), ConfigError> {
    config.validate()?;
    if !config.a.is_machine() || !config.b.is_machine() {
        return Err(ConfigError::Validation(
            "self-play participants must be capture-max or random".into(),
        ));
    }
    Ok(())
}

/// Runs a batch of self-play games, returning the records ordered by game ID.
pub fn run_batch(config: &GameConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut records = Vec::with_capacity(config.selfplay.games);
    run_batch_with_callback(config, |record| records.push(record))?;
    records.sort_by_key(|r| r.game_id);
    Ok(records)
}

/// Runs a batch of self-play games, calling `on_game` with each completed
/// record in completion order.
///
/// With more than one thread the games run on a dedicated rayon pool and
/// `on_game` is called on the current thread as they finish. The first game
/// error is returned after the batch drains.
pub fn run_batch_with_callback<F>(config: &GameConfig, on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    check_batch_config(config)?;
    info!(
        topology = %config.topology,
        size = config.board_size(),
        a = %config.a,
        b = %config.b,
        games = config.selfplay.games,
        threads = config.selfplay.threads,
        "starting self-play"
    );
    if config.selfplay.threads > 1 {
        run_parallel(config, on_game)
    } else {
        run_sequential(config, on_game)
    }
}

fn log_finished(record: &GameRecord, n: usize, total: usize, start: Instant) {
    info!(
        game = record.game_id,
        done = n,
        total,
        winner = record.winner.map_or("tie".to_string(), |p| p.to_string()),
        score_a = record.score_a,
        score_b = record.score_b,
        plies = record.plies.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "game finished"
    );
}

fn run_sequential<F>(config: &GameConfig, mut on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    let total = config.selfplay.games;
    for k in 0..total {
        let start = Instant::now();
        let record = play_seeded(config, k)?;
        log_finished(&record, k + 1, total, start);
        on_game(record);
    }
    Ok(())
}

fn run_parallel<F>(config: &GameConfig, mut on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.selfplay.threads)
        .build()?;
    let (tx, rx) = mpsc::channel::<Result<GameRecord, SelfPlayError>>();

    let config = config.clone();
    let handle = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        let total = config.selfplay.games;
        pool.install(|| {
            (0..total).into_par_iter().for_each_with(tx, |tx, k| {
                let start = Instant::now();
                let result = play_seeded(&config, k);
                if let Ok(record) = &result {
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    log_finished(record, n, total, start);
                }
                let _ = tx.send(result);
            });
        });
    });

    let mut first_err = None;
    for result in rx {
        match result {
            Ok(record) => on_game(record),
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    if handle.join().is_err() {
        return Err(SelfPlayError::WorkerPanicked);
    }
    first_err.map_or(Ok(()), Err)
}

/// Writes one record as a single JSON line.
pub fn write_record<W: Write>(record: &GameRecord, out: &mut W) -> Result<(), SelfPlayError> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    Ok(())
}

/// Writes records as JSONL (one JSON object per game, one per line).
pub fn write_records<W: Write>(records: &[GameRecord], out: &mut W) -> Result<(), SelfPlayError> {
    for record in records {
        write_record(record, out)?;
    }
    out.flush()?;
    Ok(())
}

/// Aggregate results of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub ties: usize,
    pub cut_off: usize,
    pub total_plies: usize,
}

impl Summary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = Summary {
            games: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.winner {
                Some(Player::A) => summary.a_wins += 1,
                Some(Player::B) => summary.b_wins += 1,
                None => summary.ties += 1,
            }
            if record.end != EndReason::GameOver {
                summary.cut_off += 1;
            }
            summary.total_plies += record.plies.len();
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: usize| 100.0 * n as f64 / self.games.max(1) as f64;
        writeln!(f, "=== Self-Play Summary ===")?;
        writeln!(f, "Games: {}", self.games)?;
        writeln!(
            f,
            "Avg plies/game: {:.1}",
            self.total_plies as f64 / self.games.max(1) as f64
        )?;
        writeln!(f, "A wins: {} ({:.1}%)", self.a_wins, pct(self.a_wins))?;
        writeln!(f, "B wins: {} ({:.1}%)", self.b_wins, pct(self.b_wins))?;
        writeln!(f, "Ties: {} ({:.1}%)", self.ties, pct(self.ties))?;
        write!(f, "Cut off: {}", self.cut_off)
    }
}
