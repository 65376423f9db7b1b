//! Outcome evaluation for tic-tac-toe.

use super::{check_winner, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a game as read off its board.
///
/// Always derived from a board with [`evaluate`], never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true for a win or a draw.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// A completed line wins; otherwise a full board is a draw and anything
/// else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
