//! Exhaustive minimax search.
//!
//! The engine explores every reachable continuation of the current
//! position. Hypothetical placements are made in place on the single
//! [`GameState`] and undone through a drop guard, so the board is
//! bit-identical after every call.

use super::{GameState, Player, Position};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Value of a position won by the computer.
pub const WIN_SCORE: i32 = 1;
/// Value of a position lost by the computer.
pub const LOSS_SCORE: i32 = -1;
/// Value of a drawn position.
pub const DRAW_SCORE: i32 = 0;

// ─────────────────────────────────────────────────────────────
//  Scoped placement
// ─────────────────────────────────────────────────────────────

/// A placement that exists only for the lifetime of the guard.
///
/// Creating the guard places the marker; dropping it clears the square.
/// The guard dereferences to the underlying state so recursion can
/// continue through it.
#[derive(Debug)]
pub struct Hypothetical<'a> {
    state: &'a mut GameState,
    pos: Position,
}

impl<'a> Hypothetical<'a> {
    /// Places `marker` at `pos` until the guard is dropped.
    pub fn place(state: &'a mut GameState, pos: Position, marker: Player) -> Self {
        state.place(pos, marker);
        Self { state, pos }
    }

    /// The square this guard occupies.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Hypothetical<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.state.undo(self.pos);
    }
}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Minimax engine playing for a fixed marker.
///
/// Scores are always from the computer's perspective, independent of
/// whose turn it is at a given ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    computer: Player,
}

impl Minimax {
    /// Creates an engine maximizing for `computer`.
    pub fn new(computer: Player) -> Self {
        Self { computer }
    }

    /// The maximizing marker.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The minimizing marker.
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    /// Game-theoretic value of `state` with `maximizing` choosing next.
    ///
    /// No pruning and no depth weighting: every win is worth
    /// [`WIN_SCORE`] however far away it is.
    pub fn evaluate(&self, state: &mut GameState, maximizing: bool) -> i32 {
        if state.is_winner(self.computer) {
            return WIN_SCORE;
        }
        if state.is_winner(self.human()) {
            return LOSS_SCORE;
        }
        if state.is_full() {
            return DRAW_SCORE;
        }

        let marker = if maximizing { self.computer } else { self.human() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !state.board().is_empty(pos) {
                continue;
            }
            let mut branch = Hypothetical::place(state, pos, marker);
            let score = self.evaluate(&mut branch, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Value of each legal computer move, in scan order.
    ///
    /// Empty when the position is already decided.
    pub fn scores(&self, state: &mut GameState) -> Vec<(Position, i32)> {
        if state.status().is_terminal() {
            return Vec::new();
        }

        let mut scored = Vec::new();
        for pos in Position::valid_moves(state.board()) {
            let mut branch = Hypothetical::place(state, pos, self.computer);
            let score = self.evaluate(&mut branch, false);
            trace!(position = %pos, score, "Scored candidate");
            scored.push((pos, score));
        }
        scored
    }

    /// Best immediate move for the computer.
    ///
    /// Ties keep the first position scanned, so the lowest index wins.
    /// Returns `None` if the game is already over.
    #[instrument(skip(self, state), fields(computer = %self.computer))]
    pub fn best_move(&self, state: &mut GameState) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for (pos, score) in self.scores(state) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, "Selected move");
        }
        best.map(|(pos, _)| pos)
    }
}
