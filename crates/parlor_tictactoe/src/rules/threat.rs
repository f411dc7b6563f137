//! Threat detection: lines one move away from completion.

use super::WINNING_LINES;
use crate::{Board, Mark, Position};
use tracing::{instrument, trace};

/// Finds the empty cell that would complete a line for `mark`.
///
/// A line is a threat when it holds exactly two `mark` squares and one
/// empty square. The empty position of the first such line in scan order
/// is returned. Call it with your own mark to find a win and with the
/// opponent's mark to find a block; double threats are not detected.
#[instrument(skip(board))]
pub fn find_threat(board: &Board, mark: Mark) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let target = threat_in_line(board, mark, line)?;
        trace!(?line, ?target, "Threat found");
        Some(target)
    })
}

fn threat_in_line(board: &Board, mark: Mark, line: &[Position; 3]) -> Option<Position> {
    let mut count = 0;
    let mut empty = None;

    for &pos in line {
        match board.square(pos).value() {
            Mark::Empty => {
                if empty.is_some() {
                    return None;
                }
                empty = Some(pos);
            }
            m if m == mark => count += 1,
            _ => return None,
        }
    }

    if count == 2 { empty } else { None }
}
