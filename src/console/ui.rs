//! Text rendering of the board.

use smartbot_tictactoe::{Board, Player, Square};
use std::io::Write;

/// Renders the board as three rows separated by rule lines.
///
/// ```text
///  X | O |   
/// ---+---+---
///    | X |   
/// ---+---+---
///    |   | O 
/// ```
pub fn render_board(board: &Board) -> String {
    board
        .squares()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|square| format!(" {} ", symbol(*square)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Writes the board under a heading, padded by blank lines.
pub fn write_board(out: &mut dyn Write, board: &Board) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current Board:")?;
    writeln!(out, "{}", render_board(board))?;
    writeln!(out)?;
    writeln!(out)
}

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}
