//! Game configuration fixed at game start.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_new::new;
use smartbot_tictactoe::Player;
use tracing::instrument;

/// Marker identities and turn order for one game.
///
/// The default is the classic setup: the human plays X and moves first,
/// SmartBot plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct GameConfig {
    /// Marker played by the human.
    human: Player,
    /// Marker that moves first.
    first: Player,
}

impl GameConfig {
    /// Marker played by SmartBot.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Player::X, Player::X)
    }
}

impl From<&Cli> for GameConfig {
    #[instrument(skip(cli), fields(human = ?cli.human, computer_first = cli.computer_first))]
    fn from(cli: &Cli) -> Self {
        let human = Player::from(cli.human);
        let first = if cli.computer_first {
            human.opponent()
        } else {
            human
        };
        Self::new(human, first)
    }
}
