//! Heuristic move selection for the computer side.

use crate::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the mover.
    #[display("win")]
    Win,
    /// Fills the opponent's single gap.
    #[display("block")]
    Block,
    /// Takes the empty center.
    #[display("center")]
    Center,
    /// Uniform pick among the empty squares.
    #[display("random")]
    Random,
}

/// A chosen position and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decision {
    /// Where to play.
    pub position: Position,
    /// Why.
    pub reason: Reason,
}

/// One-ply greedy opponent: win, else block, else center, else random.
///
/// Holds no state; every decision is derived from the board it is given.
/// It never creates forks and never looks past the next move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSelector;

impl MoveSelector {
    /// Chooses a move for `me` using the thread-local RNG.
    ///
    /// # Panics
    ///
    /// If the board is full.
    pub fn choose(&self, board: &Board, me: Mark, opponent: Mark) -> Position {
        self.choose_with(board, me, opponent, &mut rand::thread_rng())
    }

    /// Chooses a move for `me`, drawing the random fallback from `rng`.
    ///
    /// # Panics
    ///
    /// If the board is full.
    pub fn choose_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        me: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Position {
        self.decide_with(board, me, opponent, rng).position
    }

    /// Full decision including the rule that fired.
    ///
    /// # Panics
    ///
    /// If the board is full.
    #[instrument(skip(self, board, rng))]
    pub fn decide_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        me: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Decision {
        let decision = if let Some(position) = board.find_threat_for(me) {
            Decision {
                position,
                reason: Reason::Win,
            }
        } else if let Some(position) = board.find_threat_for(opponent) {
            Decision {
                position,
                reason: Reason::Block,
            }
        } else if board.square(Position::Center).is_empty() {
            Decision {
                position: Position::Center,
                reason: Reason::Center,
            }
        } else {
            let open = board.empty_positions();
            let position = *open
                .choose(rng)
                .unwrap_or_else(|| panic!("no empty square left for {:?}", me));
            Decision {
                position,
                reason: Reason::Random,
            }
        };

        debug!(position = %decision.position, reason = %decision.reason, "Move selected");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ME: Mark = Mark::PlayerB;
    const THEM: Mark = Mark::PlayerA;

    fn decide(board: &Board) -> Decision {
        MoveSelector.decide_with(board, ME, THEM, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_center_on_empty_board() {
        let board = Board::new();
        assert_eq!(
            decide(&board),
            Decision {
                position: Position::Center,
                reason: Reason::Center
            }
        );
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = Board::new();
        board.place(Position::TopLeft, THEM);
        board.place(Position::TopCenter, THEM);
        board.place(Position::BottomLeft, ME);
        board.place(Position::BottomCenter, ME);
        let decision = decide(&board);
        assert_eq!(decision.position, Position::BottomRight);
        assert_eq!(decision.reason, Reason::Win);
    }

    #[test]
    fn test_block_beats_center() {
        let mut board = Board::new();
        board.place(Position::TopLeft, THEM);
        board.place(Position::MiddleLeft, THEM);
        let decision = decide(&board);
        assert_eq!(decision.position, Position::BottomLeft);
        assert_eq!(decision.reason, Reason::Block);
    }

    #[test]
    fn test_random_when_center_taken() {
        let mut board = Board::new();
        board.place(Position::Center, THEM);
        let decision = decide(&board);
        assert_eq!(decision.reason, Reason::Random);
        assert!(board.square(decision.position).is_empty());
    }

    #[test]
    #[should_panic(expected = "no empty square")]
    fn test_full_board_panics() {
        let mut board = Board::new();
        // A B A / B A A / B A B, no line for either side
        let pattern = [THEM, ME, THEM, ME, THEM, THEM, ME, THEM, ME];
        for (pos, mark) in Position::ALL.into_iter().zip(pattern) {
            board.place(pos, mark);
        }
        decide(&board);
    }
}
