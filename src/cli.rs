//! Command-line interface for smartbot.

use clap::{Parser, ValueEnum};
use smartbot_tictactoe::Player;

/// SmartBot - play tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "smartbot")]
#[command(about = "Play tic-tac-toe against SmartBot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Marker you play as
    #[arg(long, value_enum, default_value_t = MarkChoice::X)]
    pub human: MarkChoice,

    /// Let SmartBot make the first move
    #[arg(long)]
    pub computer_first: bool,

    /// Diagnostics filter for stderr (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Marker choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkChoice {
    /// Play as X
    X,
    /// Play as O
    O,
}

impl From<MarkChoice> for Player {
    fn from(mark: MarkChoice) -> Self {
        match mark {
            MarkChoice::X => Player::X,
            MarkChoice::O => Player::O,
        }
    }
}
