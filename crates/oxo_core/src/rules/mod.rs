//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so callers can evaluate hypothetical boards as cheaply as real
//! ones.

mod draw;
mod outcome;
mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{WINNING_LINES, check_winner, winning_line};
