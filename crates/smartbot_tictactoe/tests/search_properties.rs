//! Exhaustive properties of the rules and the minimax engine.

use smartbot_tictactoe::{
    Board, GameState, GameStatus, Hypothetical, LOSS_SCORE, Minimax, Player, Position,
};
use std::collections::HashSet;

/// Every board reachable by alternating legal placement from empty,
/// with X moving first, paired with the side to move.
fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new(Player::X)];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(*state.board()) {
            continue;
        }
        states.push(state.clone());
        if state.status().is_terminal() {
            continue;
        }
        for pos in state.board().empty_positions() {
            let mut next = state.clone();
            next.play(pos).unwrap();
            stack.push(next);
        }
    }
    states
}

fn human_can_win_now(state: &mut GameState, human: Player) -> bool {
    let empty: Vec<Position> = state.board().empty_positions().collect();
    empty.into_iter().any(|pos| {
        let branch = Hypothetical::place(&mut *state, pos, human);
        branch.is_winner(human)
    })
}

#[test]
fn test_reachable_state_count() {
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_marker_counts_stay_balanced() {
    for state in reachable_states() {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        assert!(x == o || x == o + 1, "unbalanced board {:?}", state.board());
    }
}

#[test]
fn test_winners_are_mutually_exclusive() {
    for state in reachable_states() {
        assert!(
            !(state.is_winner(Player::X) && state.is_winner(Player::O)),
            "both players win on {:?}",
            state.board()
        );
    }
}

#[test]
fn test_status_classification() {
    for state in reachable_states() {
        let expected = match (
            state.is_winner(Player::X),
            state.is_winner(Player::O),
            state.is_full(),
        ) {
            (true, _, _) => GameStatus::Won(Player::X),
            (false, true, _) => GameStatus::Won(Player::O),
            (false, false, true) => GameStatus::Draw,
            (false, false, false) => GameStatus::InProgress,
        };
        assert_eq!(state.status(), expected);
    }
}

#[test]
fn test_place_then_undo_restores_board() {
    for state in reachable_states() {
        for pos in state.board().empty_positions() {
            for marker in [Player::X, Player::O] {
                let mut probe = state.clone();
                probe.place(pos, marker);
                probe.undo(pos);
                assert_eq!(probe, state);
            }
        }
    }
}

#[test]
fn test_best_move_is_legal_and_safe() {
    for state in reachable_states() {
        if state.status().is_terminal() {
            continue;
        }
        let computer = state.turn();
        let engine = Minimax::new(computer);
        let mut probe = state.clone();

        let choice = engine
            .best_move(&mut probe)
            .expect("in-progress game has a move");
        assert_eq!(probe, state, "search must restore the board");
        assert!(state.board().is_empty(choice));

        let scores = engine.scores(&mut probe);
        let best = scores.iter().map(|&(_, s)| s).max().unwrap();
        let chosen = scores.iter().find(|&&(p, _)| p == choice).unwrap().1;
        assert_eq!(chosen, best);

        let first_best = scores.iter().find(|&&(_, s)| s == best).unwrap().0;
        assert_eq!(choice, first_best, "ties go to the lowest index");

        let mut after = Hypothetical::place(&mut probe, choice, computer);
        if human_can_win_now(&mut after, computer.opponent()) {
            assert!(
                scores.iter().all(|&(_, s)| s == LOSS_SCORE),
                "allowed an immediate loss on {:?}",
                state.board()
            );
        }
    }
}

/// Plays every human line against the engine and reports any human win.
fn human_never_wins(state: &mut GameState, engine: &Minimax) {
    match state.status() {
        GameStatus::Won(winner) => {
            assert_ne!(winner, engine.human(), "human won on {:?}", state.board());
            return;
        }
        GameStatus::Draw => return,
        GameStatus::InProgress => {}
    }

    if state.turn() == engine.computer() {
        let pos = engine.best_move(state).unwrap();
        let mut next = state.clone();
        next.play(pos).unwrap();
        human_never_wins(&mut next, engine);
    } else {
        for pos in Position::ALL {
            if state.board().is_empty(pos) {
                let mut next = state.clone();
                next.play(pos).unwrap();
                human_never_wins(&mut next, engine);
            }
        }
    }
}

#[test]
fn test_engine_never_loses_moving_second() {
    let engine = Minimax::new(Player::O);
    human_never_wins(&mut GameState::new(Player::X), &engine);
}

#[test]
fn test_engine_never_loses_moving_first() {
    let engine = Minimax::new(Player::X);
    human_never_wins(&mut GameState::new(Player::X), &engine);
}

#[test]
fn test_self_play_is_a_draw() {
    let mut state = GameState::new(Player::X);
    while !state.status().is_terminal() {
        let engine = Minimax::new(state.turn());
        let pos = engine.best_move(&mut state).unwrap();
        state.play(pos).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    let state = GameState::with_board(board, Player::X);
    assert!(state.is_full());
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_partial_board_can_be_won() {
    let board: Board = "XXXOO____".parse().unwrap();
    let state = GameState::with_board(board, Player::O);
    assert!(state.is_winner(Player::X));
    assert!(!state.is_full());
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_blocks_row_threat() {
    let board: Board = "XX__O____".parse().unwrap();
    let mut state = GameState::with_board(board, Player::O);
    let engine = Minimax::new(Player::O);
    assert_eq!(engine.best_move(&mut state).map(Position::to_index), Some(2));
}
