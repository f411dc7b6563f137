//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty squares left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| s.is_marked())
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
