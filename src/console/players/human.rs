//! Human player that types moves on the console.

use super::Player;
use crate::console::input::{INVALID_MOVE_MESSAGE, parse_move};
use anyhow::Result;
use smartbot_tictactoe::{GameState, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Human player reading moves line by line.
///
/// Rejected input is answered with [`INVALID_MOVE_MESSAGE`] and the
/// prompt repeats without limit. End of input is an error.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, state: &mut GameState, out: &mut dyn Write) -> Result<Position> {
        loop {
            write!(out, "Enter your move (1-9): ")?;
            out.flush()?;

            // Raw bytes: text that is not UTF-8 is rejected like any other typo.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move(&String::from_utf8_lossy(&line), state) {
                Ok(position) => {
                    info!(%position, "Human chose position");
                    writeln!(out, "You chose position {}.", position.to_one_based())?;
                    writeln!(out)?;
                    return Ok(position);
                }
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(out, "{}", INVALID_MOVE_MESSAGE)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
