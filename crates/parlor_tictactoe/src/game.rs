//! Validated turn driver for a single match.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// The board filled up with no line completed.
    Draw,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already taken", _0)]
    SquareOccupied(Position),

    /// The match is already over.
    #[display("The match is already over")]
    MatchOver,
}

impl std::error::Error for MoveError {}

/// One match: a board, the side to move and the outcome so far.
///
/// Unlike [`Board::place`], [`Match::play`] rejects illegal moves with an
/// error instead of panicking, so it can take unvalidated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    to_move: Mark,
    status: Status,
    history: Vec<Position>,
}

impl Match {
    /// Starts a match with `first` to move.
    ///
    /// # Panics
    ///
    /// If `first` is [`Mark::Empty`].
    pub fn new(first: Mark) -> Self {
        assert!(first.is_player(), "a match must start with a player mark");
        Self {
            board: Board::new(),
            to_move: first,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and starts again with `first` to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Mark) {
        assert!(first.is_player(), "a match must start with a player mark");
        self.board.reset();
        self.to_move = first;
        self.status = Status::InProgress;
        self.history.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the match status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the match has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Plays the side to move at `pos` and returns the new status.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Status, MoveError> {
        if self.is_over() {
            return Err(MoveError::MatchOver);
        }
        if self.board.square(pos).is_marked() {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.place(pos, self.to_move);
        self.history.push(pos);

        self.status = if let Some(mark) = self.board.winner() {
            info!(winner = ?mark, "Match won");
            Status::Won(mark)
        } else if self.board.is_full() {
            info!("Match drawn");
            Status::Draw
        } else {
            Status::InProgress
        };
        self.to_move = self.to_move.opponent();

        Ok(self.status)
    }
}
