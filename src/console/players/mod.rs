//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use smartbot_tictactoe::{GameState, Position};
use std::io::Write;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The state is lent mutably so a search may explore it; it must be
    /// unchanged when the call returns. Progress messages go to `out`.
    fn get_move(&mut self, state: &mut GameState, out: &mut dyn Write) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
