//! SmartBot - console tic-tac-toe against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Game logic**: [`smartbot_tictactoe`] owns the board, the rules and
//!   the minimax engine
//! - **Config**: which marker the human plays and who moves first
//! - **Console**: board rendering, move parsing, players and the game loop
//!
//! # Example
//!
//! ```no_run
//! use smartbot::{ComputerPlayer, GameConfig, HumanPlayer, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let human = HumanPlayer::new("Human", std::io::stdin().lock());
//! let computer = ComputerPlayer::new("SmartBot", config.computer());
//! let out = std::io::stdout();
//! let mut game = Orchestrator::new(config, Box::new(human), Box::new(computer), out);
//! let outcome = game.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

// Crate-level exports - Command line
pub use cli::{Cli, MarkChoice};

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Console front end
pub use console::{
    ComputerPlayer, HumanPlayer, INVALID_MOVE_MESSAGE, InputError, Orchestrator, Player,
    parse_move, render_board, write_board,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use smartbot_tictactoe::{
    Board, GameState, GameStatus, Minimax, MoveError, Player as TicTacToePlayer, Position, Square,
};
