//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. The status of a game is never
//! stored; it is recomputed from the board through these rules.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_winner, winner, LINES};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Classifies a board.
///
/// Order matters: a full board holding a line is a win, never a draw.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if is_winner(board, Player::X) {
        GameStatus::Won(Player::X)
    } else if is_winner(board, Player::O) {
        GameStatus::Won(Player::O)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
