//! Game orchestration between the human and SmartBot.

use super::players::Player;
use super::ui::write_board;
use crate::config::GameConfig;
use anyhow::Result;
use smartbot_tictactoe::{GameState, GameStatus};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game from the empty board to a terminal state.
///
/// Win and draw states are absorbing: the loop stops on the move that
/// reaches one and no further moves are requested.
pub struct Orchestrator<W> {
    state: GameState,
    config: GameConfig,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with an empty board.
    pub fn new(
        config: GameConfig,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        out: W,
    ) -> Self {
        Self {
            state: GameState::new(*config.first()),
            config,
            human,
            computer,
            out,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the orchestrator, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop and returns the final status.
    #[instrument(skip(self), fields(human = %self.config.human(), first = %self.config.first()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");

        writeln!(self.out, "Welcome to Tic-Tac-Toe!")?;
        writeln!(
            self.out,
            "You are {}, and {} is {}. Try to win if you can!",
            self.config.human(),
            self.computer.name(),
            self.config.computer()
        )?;
        writeln!(self.out)?;
        write_board(&mut self.out, self.state.board())?;

        let status = loop {
            let is_human = self.state.turn() == *self.config.human();
            if is_human {
                writeln!(self.out, "Your turn!")?;
            } else {
                writeln!(self.out, "{}'s turn!", self.computer.name())?;
            }

            let player = if is_human {
                &mut self.human
            } else {
                &mut self.computer
            };
            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(&mut self.state, &mut self.out)?;

            let status = self.state.play(position)?;
            write_board(&mut self.out, self.state.board())?;

            if status.is_terminal() {
                break status;
            }
        };

        match status.winner() {
            Some(winner) if winner == *self.config.human() => {
                writeln!(self.out, "Congratulations! You won! 🎉")?;
            }
            Some(_) => {
                writeln!(
                    self.out,
                    "{} wins! Better luck next time!",
                    self.computer.name()
                )?;
            }
            None => writeln!(self.out, "It's a draw! Well played!")?,
        }
        writeln!(self.out, "Game over! Thanks for playing.")?;
        self.out.flush()?;

        info!(outcome = %status, "Game finished");
        Ok(status)
    }
}
