//! Win detection logic for tic-tac-toe.

use super::WINNING_LINES;
use crate::{Board, Mark};
use tracing::instrument;

/// Returns the mark that fills a whole line, if any.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete
/// line decides. Empty lines never count.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let mark = board.square(a).value();
        if mark.is_player()
            && mark == board.square(b).value()
            && mark == board.square(c).value()
        {
            return Some(mark);
        }
    }

    None
}
