//! Match tallies for first-to-N games.

use derive_getters::Getters;

/// Which seat took a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The computer opponent.
    Computer,
}

/// Points per side across the matches of one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Matches won by the human.
    human: u32,
    /// Matches won by the computer.
    computer: u32,
}

impl Scoreboard {
    /// Starts at 0-0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point for `side`.
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Computer => self.computer += 1,
        }
    }

    /// The side that has reached `target`, if any.
    pub fn champion(&self, target: u32) -> Option<Side> {
        if self.human >= target {
            Some(Side::Human)
        } else if self.computer >= target {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// True before any point has been scored.
    pub fn is_blank(&self) -> bool {
        self.human == 0 && self.computer == 0
    }

    /// Back to 0-0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_to_target() {
        let mut score = Scoreboard::new();
        assert!(score.is_blank());
        for _ in 0..4 {
            score.record(Side::Computer);
        }
        score.record(Side::Human);
        assert_eq!(score.champion(5), None);

        score.record(Side::Computer);
        assert_eq!(score.champion(5), Some(Side::Computer));
        assert_eq!((*score.human(), *score.computer()), (1, 5));

        score.reset();
        assert!(score.is_blank());
    }
}
