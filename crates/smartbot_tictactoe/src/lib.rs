//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Types**: markers, squares, the 3x3 board and the mutable game state
//! - **Rules**: pure win/draw detection over a board
//! - **Position**: typed cell indices (0-8, row-major)
//! - **Search**: minimax over every reachable continuation
//!
//! # Example
//!
//! ```
//! use smartbot_tictactoe::{GameState, Minimax, Player, Position};
//!
//! let mut state = GameState::new(Player::O);
//! let engine = Minimax::new(Player::O);
//! assert_eq!(engine.best_move(&mut state), Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::MoveError;
pub use position::Position;
pub use search::{DRAW_SCORE, Hypothetical, LOSS_SCORE, Minimax, WIN_SCORE};
pub use types::{Board, BoardParseError, GameState, GameStatus, Player, Square};
