//! Parsing of typed moves.
//!
//! Players number squares 1-9; the board indexes them 0-8.

use derive_more::{Display, Error};
use smartbot_tictactoe::{GameState, Position};
use tracing::instrument;

/// Message shown whenever a typed move is rejected.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Please choose an empty spot (1-9).";

/// Reasons a typed move is rejected.
///
/// Every variant is recovered the same way: the player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The text was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(#[error(not(source))] String),
    /// The number was outside 1-9.
    #[display("{} is outside 1-9", _0)]
    OutOfRange(#[error(not(source))] i64),
    /// The square is already taken.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Parses a 1-based square number and checks it is a legal move.
#[instrument(skip(state))]
pub fn parse_move(input: &str, state: &GameState) -> Result<Position, InputError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    let pos = usize::try_from(number)
        .ok()
        .and_then(Position::from_one_based)
        .ok_or(InputError::OutOfRange(number))?;

    if state.is_legal_move(pos.to_index()) {
        Ok(pos)
    } else {
        Err(InputError::Occupied(pos))
    }
}
