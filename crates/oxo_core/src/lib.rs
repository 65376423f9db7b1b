//! Tic-tac-toe rules engine and computer opponents.
//!
//! This crate holds the pure parts of the game: the board, outcome
//! evaluation, and the move-selection policies behind each difficulty
//! tier. Nothing here performs I/O or keeps state between calls; the
//! caller owns the board and hands it in by reference.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and [`Position`]
//! - **Rules**: [`evaluate`] and the fixed [`WINNING_LINES`]
//! - **AI**: [`random_move`], [`heuristic_move`], [`medium_move`] and the
//!   [`Difficulty`] tiers that bind them
//! - **Randomness**: the injectable [`RandomSource`] capability
//!
//! # Example
//!
//! ```
//! use oxo_core::{Board, Difficulty, Mark, Outcome, ScriptedSource, evaluate};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! let mut source = ScriptedSource::new(vec![0.9]);
//! let pos = Difficulty::Hard.select_move(&board, Mark::X, &mut source);
//! assert_eq!(pos.map(|p| p.to_index()), Some(2));
//!
//! let board = board.with_mark(pos.unwrap(), Mark::X);
//! assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod position;
mod random;
mod rules;
mod types;

pub use ai::{Difficulty, HEURISTIC_THRESHOLD, heuristic_move, medium_move, random_move};
pub use position::Position;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use rules::{Outcome, WINNING_LINES, check_winner, evaluate, is_full, winning_line};
pub use types::{Board, BoardParseError, Mark, Square};
