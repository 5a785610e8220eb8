//! Self-play game generation CLI.
//!
//! Plays machine-only reversi games in parallel and writes one JSON record
//! per game (JSONL) to stdout or a file. A summary goes to stderr.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi::board::Topology;
use reversi::config::GameConfig;
use reversi::selfplay::{self, Participant, Summary};

/// Generate reversi games by self-play.
#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about, long_about = None)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Number of parallel threads
    #[arg(long)]
    threads: Option<usize>,

    /// Base random seed; game k uses seed + k
    #[arg(long)]
    seed: Option<u64>,

    /// Board shape: hex or square
    #[arg(long)]
    topology: Option<Topology>,

    /// Board side length
    #[arg(long)]
    size: Option<i32>,

    /// Player A: capture-max or random
    #[arg(long)]
    a: Option<Participant>,

    /// Player B: capture-max or random
    #[arg(long)]
    b: Option<Participant>,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress the summary
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn to_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig {
                a: Participant::CaptureMax,
                b: Participant::Random,
                ..Default::default()
            },
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
        if let Some(games) = self.games {
            config.selfplay.games = games;
        }
        if let Some(threads) = self.threads {
            config.selfplay.threads = threads;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config()?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let start = Instant::now();
    let mut records = Vec::with_capacity(config.selfplay.games);
    let mut write_err = None;
    selfplay::run_batch_with_callback(&config, |record| {
        if write_err.is_none() {
            if let Err(e) = selfplay::write_record(&record, &mut out) {
                write_err = Some(e);
            }
        }
        records.push(record);
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }
    out.flush()?;

    info!(
        games = records.len(),
        elapsed_s = start.elapsed().as_secs_f64(),
        "self-play finished"
    );
    if !cli.quiet {
        eprintln!("{}", Summary::from_records(&records));
    }
    Ok(())
}
