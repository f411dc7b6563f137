//! The 3x3 board and its strategic queries.

use crate::rules;
use crate::{Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Owns exactly nine squares addressed by [`Position`]. Queries are pure
/// reads; the only mutations are [`Board::place`] and [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.squares = [Square::new(); 9];
    }

    /// Gets the square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose square is empty, in ascending order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.square(pos).is_empty())
            .collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|s| s.value() == mark).count()
    }

    /// True when no empty square is left.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when all nine squares are empty.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Square::is_empty)
    }

    /// The mark completing the first full line in scan order, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Convenience wrapper over [`Board::winner`].
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Empty cell that completes a line for `mark`, if one exists.
    ///
    /// See [`rules::find_threat`] for the exact definition of a threat.
    pub fn find_threat_for(&self, mark: Mark) -> Option<Position> {
        rules::find_threat(self, mark)
    }

    /// Places `mark` on `pos`.
    ///
    /// # Panics
    ///
    /// If the square is already marked or `mark` is [`Mark::Empty`]. Callers
    /// validate against [`Board::empty_positions`] first.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) {
        assert!(mark.is_player(), "cannot place an empty mark at {}", pos);
        let square = &mut self.squares[pos.index()];
        assert!(
            square.is_empty(),
            "square {} is already marked with {:?}",
            pos,
            square.value()
        );
        square.mark(mark);
    }
}
