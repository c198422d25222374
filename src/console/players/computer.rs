//! Computer player driven by the minimax engine.

use super::Player;
use anyhow::Result;
use smartbot_tictactoe::{GameState, Minimax, Player as Mark, Position};
use std::io::Write;
use tracing::{info, instrument};

/// SmartBot: always plays the first of its best-valued moves.
pub struct ComputerPlayer {
    name: String,
    engine: Minimax,
}

impl ComputerPlayer {
    /// Creates a computer player for the given marker.
    pub fn new(name: impl Into<String>, marker: Mark) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(marker),
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, marker = %self.engine.computer()))]
    fn get_move(&mut self, state: &mut GameState, out: &mut dyn Write) -> Result<Position> {
        writeln!(out, "{} is analyzing the best possible move...", self.name)?;

        let position = self
            .engine
            .best_move(state)
            .ok_or_else(|| anyhow::anyhow!("No move available: game is already over"))?;

        info!(%position, "Computer chose position");
        writeln!(
            out,
            "{} has chosen position {}.",
            self.name,
            position.to_one_based()
        )?;
        writeln!(out)?;
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
