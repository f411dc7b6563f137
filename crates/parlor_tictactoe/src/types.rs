//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// The first side (the human in the console game).
    PlayerA,
    /// The second side (the computer in the console game).
    PlayerB,
}

impl Mark {
    /// Returns the opposing side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `PlayerA` and `PlayerB`.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

/// A square on the tic-tac-toe board.
///
/// Squares are created empty and marked at most once per match; only
/// [`Board::reset`](crate::Board::reset) clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    mark: Mark,
}

impl Square {
    /// Creates an empty square.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff nothing has been played here.
    pub fn is_empty(&self) -> bool {
        self.mark == Mark::Empty
    }

    /// Complement of [`Square::is_empty`].
    pub fn is_marked(&self) -> bool {
        !self.is_empty()
    }

    /// Sets the occupancy. Legality is checked by the caller.
    pub fn mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    /// Current occupancy.
    pub fn value(&self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_square_is_empty() {
        let square = Square::new();
        assert!(square.is_empty());
        assert!(!square.is_marked());
        assert_eq!(square.value(), Mark::Empty);
    }

    #[test]
    fn test_marked_square() {
        let mut square = Square::new();
        square.mark(Mark::PlayerB);
        assert!(square.is_marked());
        assert_eq!(square.value(), Mark::PlayerB);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::PlayerA.opponent(), Mark::PlayerB);
        assert_eq!(Mark::PlayerB.opponent(), Mark::PlayerA);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }
}
