//! Weighted mix of heuristic and random play for the medium tier.

use super::{heuristic_move, random_move};
use crate::{Board, Mark, Position, RandomSource};
use tracing::{debug, instrument};

/// Samples strictly above this value take the heuristic branch (60% of
/// uniform draws); the rest play randomly.
pub const HEURISTIC_THRESHOLD: f64 = 0.4;

/// Plays [`heuristic_move`] with 60% probability, [`random_move`] otherwise.
///
/// The branch is drawn once per call from `source`, before any sample the
/// chosen policy itself may draw.
#[instrument(skip(source))]
pub fn medium_move<S: RandomSource + ?Sized>(
    board: &Board,
    mark: Option<Mark>,
    source: &mut S,
) -> Option<Position> {
    let gate = source.next_unit();
    if gate > HEURISTIC_THRESHOLD {
        debug!(gate, "Medium tier playing heuristic");
        heuristic_move(board, mark, source)
    } else {
        debug!(gate, "Medium tier playing random");
        random_move(board, source)
    }
}
