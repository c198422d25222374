//! Console front end: rendering, input parsing, players and the game loop.

mod input;
mod orchestrator;
mod players;
mod ui;

pub use input::{INVALID_MOVE_MESSAGE, InputError, parse_move};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use ui::{render_board, write_board};
