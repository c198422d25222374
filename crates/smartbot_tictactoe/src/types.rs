//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Player marker, used both as a square value and a player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Player X.
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |&pos| self.is_empty(pos))
    }

    /// Number of squares holding the given marker.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character was not one of `X`, `O`, `_`, `.` or a space.
    #[display("Unexpected cell character {:?}", _0)]
    BadCell(#[error(not(source))] char),
}

/// Parses nine cells such as `"XX_.O____"` (`_`, `.` and space are empty).
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | ' ' => Square::Empty,
                other => return Err(BoardParseError::BadCell(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// Status of a game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for win and draw states.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Mutable game state: the board and the side to move.
///
/// The status is never stored. It is recomputed from the board on
/// every query so that search can place and undo freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    turn: Player,
}

impl GameState {
    /// Creates an empty game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            turn: first,
        }
    }

    /// Creates a game from an existing board.
    pub fn with_board(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Places a marker on an empty square.
    ///
    /// The square must be empty. Search only ever iterates empty squares,
    /// so an occupied target is a defect in the caller.
    pub fn place(&mut self, pos: Position, marker: Player) {
        debug_assert!(
            self.board.is_empty(pos),
            "place on occupied square {}",
            pos
        );
        self.board.set(pos, Square::Occupied(marker));
    }

    /// Clears a square, reversing a previous [`place`](Self::place).
    pub fn undo(&mut self, pos: Position) {
        self.board.set(pos, Square::Empty);
    }

    /// Returns true if `marker` holds any complete line.
    pub fn is_winner(&self, marker: Player) -> bool {
        rules::is_winner(&self.board, marker)
    }

    /// Returns true if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Classifies the board as won, drawn or in progress.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns true if `index` names an empty square (0-8).
    pub fn is_legal_move(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Plays a checked move for the side to move.
    ///
    /// On success the turn passes to the opponent unless the move ended
    /// the game.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.place(pos, self.turn);
        let status = self.status();
        if !status.is_terminal() {
            self.turn = self.turn.opponent();
        }
        debug!(%status, "Move applied");
        Ok(status)
    }
}
