//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines that end the game: rows, then columns, then diagonals.
///
/// Scan order matters for boards with more than one completed line: the
/// first line in this order decides the winner.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the owner of the first completed line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    match winning_line(board).map(|[a, _, _]| board.get(a)) {
        Some(Square::Occupied(mark)) => Some(mark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let b = line
                    .iter()
                    .fold(Board::new(), |b, &pos| b.with_mark(pos, mark));
                assert_eq!(check_winner(&b), Some(mark), "line {:?}", line);
                assert_eq!(winning_line(&b), Some(line));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XXO......")), None);
    }

    #[test]
    fn test_double_line_resolved_by_scan_order() {
        // O owns the top row, X owns the bottom row; rows scan top first.
        let b = board("OOO...XXX");
        assert_eq!(check_winner(&b), Some(Mark::O));
        assert_eq!(
            winning_line(&b),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );

        // X owns the left column, O owns the right column.
        let b = board("X.OX.OX.O");
        assert_eq!(check_winner(&b), Some(Mark::X));
    }
}
