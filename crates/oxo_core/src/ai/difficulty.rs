//! Difficulty tiers and their move-selection policies.

use super::{heuristic_move, medium_move, random_move};
use crate::{Board, Mark, Position, RandomSource};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Difficulty tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Heuristic play 60% of the time, random otherwise.
    #[default]
    Medium,
    /// Always the one-ply heuristic.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Chooses a move for `mark` using this tier's policy.
    ///
    /// Returns `None` when the board is full.
    #[instrument(skip(source))]
    pub fn select_move<S: RandomSource + ?Sized>(
        self,
        board: &Board,
        mark: Mark,
        source: &mut S,
    ) -> Option<Position> {
        match self {
            Self::Easy => random_move(board, source),
            Self::Medium => medium_move(board, Some(mark), source),
            Self::Hard => heuristic_move(board, Some(mark), source),
        }
    }
}
