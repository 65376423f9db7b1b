//! Uniformly random move selection.

use crate::random::choose;
use crate::{Board, Position, RandomSource};
use tracing::{debug, instrument};

/// Picks an empty cell uniformly at random.
///
/// Returns `None` on a full board. Draws exactly one sample when a move
/// exists and none otherwise.
#[instrument(skip(source))]
pub fn random_move<S: RandomSource + ?Sized>(board: &Board, source: &mut S) -> Option<Position> {
    let available = board.empty_positions();
    let choice = choose(&available, source);
    debug!(available = available.len(), ?choice, "Random move");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut source = ScriptedSource::new(vec![0.5]);
        assert_eq!(random_move(&board("XOXXOOOXX"), &mut source), None);
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        for sample in [0.0, 0.5, 0.999] {
            let mut source = ScriptedSource::new(vec![sample]);
            assert_eq!(
                random_move(&board("XOXXOOO.X"), &mut source),
                Some(Position::BottomCenter)
            );
        }
    }

    #[test]
    fn test_scripted_sample_selects_among_empty_cells() {
        // Empty cells: 1, 3, 5, 6, 7
        let b = board("X.O.X...O");
        let pick = |sample| random_move(&b, &mut ScriptedSource::new(vec![sample]));
        assert_eq!(pick(0.0), Some(Position::TopCenter));
        assert_eq!(pick(0.5), Some(Position::MiddleRight));
        assert_eq!(pick(0.99), Some(Position::BottomCenter));
    }
}
