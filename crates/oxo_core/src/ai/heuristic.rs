//! One-ply heuristic move selection used by the hard tier.

use super::random_move;
use crate::{Board, Mark, Position, RandomSource, check_winner};
use tracing::{debug, instrument};

/// Finds the lowest-indexed empty cell where `mark` would complete a line.
fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| check_winner(&board.with_mark(pos, mark)) == Some(mark))
}

/// Picks a move for `mark` by simple priorities.
///
/// 1. Complete a line for `mark`.
/// 2. Block a line the opponent would complete next turn.
/// 3. Take the center.
/// 4. Fall back to [`random_move`].
///
/// Ties within a step go to the lowest cell index. Returns `None` when
/// `mark` is unset or the board is full. There is no deeper search, so a
/// fork beats it.
#[instrument(skip(source))]
pub fn heuristic_move<S: RandomSource + ?Sized>(
    board: &Board,
    mark: Option<Mark>,
    source: &mut S,
) -> Option<Position> {
    let mark = mark?;

    if let Some(pos) = completing_cell(board, mark) {
        debug!(%mark, %pos, "Taking winning cell");
        return Some(pos);
    }

    if let Some(pos) = completing_cell(board, mark.opponent()) {
        debug!(%mark, %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!(%mark, "Taking center");
        return Some(Position::Center);
    }

    random_move(board, source)
}
