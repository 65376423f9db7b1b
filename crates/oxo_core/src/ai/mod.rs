//! Computer opponents for tic-tac-toe.
//!
//! Three policies, one per difficulty tier:
//!
//! - [`random_move`]: any empty cell, uniformly
//! - [`heuristic_move`]: win now, else block, else center, else random
//! - [`medium_move`]: a coin weighted toward the heuristic
//!
//! Every policy returns `None` when it has no move to offer. None of them
//! look further ahead than the next move.

mod difficulty;
mod heuristic;
mod medium;
mod random;

pub use difficulty::Difficulty;
pub use heuristic::heuristic_move;
pub use medium::{HEURISTIC_THRESHOLD, medium_move};
pub use random::random_move;
