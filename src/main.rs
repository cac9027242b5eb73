//! # Burrow Main Entry Point
//!
//! Parses arguments, sets up logging, builds the session and runs the turn
//! loop on stdin/stdout.

use burrow::generation::utils::time_seed;
use burrow::{BurrowResult, GameSession, GenerationConfig};
use clap::Parser;
use log::info;
use std::io;

/// Command line arguments for Burrow.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "A terminal tile-grid dungeon explorer")]
#[command(version)]
struct Args {
    /// Random seed for world generation (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> BurrowResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Burrow v{}", burrow::VERSION);

    let seed = args.seed.unwrap_or_else(time_seed);
    let mut session = GameSession::generate(GenerationConfig::new(seed))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

/// Initializes the logging system; `RUST_LOG` overrides the CLI level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}
