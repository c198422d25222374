//! SmartBot - console tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use smartbot::{Cli, ComputerPlayer, GameConfig, HumanPlayer, Orchestrator};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref());

    let config = GameConfig::from(&cli);
    info!(?config, "Configuration loaded");

    let human = HumanPlayer::new("Human", io::stdin().lock());
    let computer = ComputerPlayer::new("SmartBot", config.computer());
    let out = io::stdout().lock();
    let mut game = Orchestrator::new(config, Box::new(human), Box::new(computer), out);

    game.run()?;
    Ok(())
}

/// Sends diagnostics to stderr so they never interleave with the board.
#[instrument]
fn initialize_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
