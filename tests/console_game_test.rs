//! Scripted console games against SmartBot.

use smartbot::{
    ComputerPlayer, GameConfig, GameStatus, HumanPlayer, INVALID_MOVE_MESSAGE, Orchestrator,
    TicTacToePlayer as Mark,
};
use std::io::Cursor;

fn play(config: GameConfig, script: &str) -> (anyhow::Result<GameStatus>, String) {
    let human = HumanPlayer::new("Human", Cursor::new(script.to_string()));
    let computer = ComputerPlayer::new("SmartBot", config.computer());
    let mut game = Orchestrator::new(config, Box::new(human), Box::new(computer), Vec::new());
    let result = game.run();
    let text = String::from_utf8(game.into_output()).unwrap();
    (result, text)
}

#[test]
fn test_opening_banner() {
    let (_, text) = play(GameConfig::default(), "1\n2\n3\n4\n5\n6\n7\n8\n9\n");
    assert!(text.starts_with(
        "Welcome to Tic-Tac-Toe!\n\
         You are X, and SmartBot is O. Try to win if you can!\n\
         \n\
         \nCurrent Board:\n"
    ));
    assert!(text.contains("Your turn!\nEnter your move (1-9): You chose position 1.\n"));
}

#[test]
fn test_computer_punishes_weak_play() {
    let (result, text) = play(GameConfig::default(), "1\n2\n3\n4\n5\n6\n7\n8\n9\n");
    assert_eq!(result.unwrap(), GameStatus::Won(Mark::O));

    // X X O / X O _ / O _ _
    assert!(text.contains(" X | X | O \n---+---+---\n X | O |   \n---+---+---\n O |   |   \n"));
    assert!(text.contains("SmartBot's turn!\nSmartBot is analyzing the best possible move...\n"));
    assert!(text.contains("SmartBot has chosen position 7.\n"));
    assert!(text.contains("SmartBot wins! Better luck next time!\n"));
    assert!(text.ends_with("Game over! Thanks for playing.\n"));
    assert!(!text.contains("Congratulations"));
}

#[test]
fn test_invalid_entries_reprompt_and_game_draws() {
    let script = "abc\n5\n0\n9\n10\n1\n2\n-3\n3\n4\n6\n7\n8\n";
    let (result, text) = play(GameConfig::default(), script);
    assert_eq!(result.unwrap(), GameStatus::Draw);

    assert_eq!(text.matches(INVALID_MOVE_MESSAGE).count(), 7);
    assert!(text.contains("It's a draw! Well played!\n"));
    // O X O / X X O / X O X
    assert!(text.contains(" O | X | O \n---+---+---\n X | X | O \n---+---+---\n X | O | X \n"));
}

#[test]
fn test_computer_moves_first_as_x() {
    let config = GameConfig::new(Mark::O, Mark::X);
    let (result, text) = play(config, "1\n2\n3\n4\n5\n6\n7\n8\n9\n");
    assert_eq!(result.unwrap(), GameStatus::Won(Mark::X));

    assert!(text.contains("You are O, and SmartBot is X."));
    let first_turn = text.find("SmartBot's turn!").unwrap();
    assert!(first_turn < text.find("Your turn!").unwrap());
    assert!(text.contains("SmartBot has chosen position 1.\n"));
}

#[test]
fn test_closed_input_fails() {
    let (result, text) = play(GameConfig::default(), "abc\n");
    assert!(result.is_err());
    assert_eq!(text.matches(INVALID_MOVE_MESSAGE).count(), 1);
    assert!(!text.contains("Game over!"));
}
