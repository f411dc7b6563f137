//! Rounds played so far.

use crate::{Gesture, RoundOutcome};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One round: both throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// The human's throw.
    pub human: Gesture,
    /// The computer's throw.
    pub computer: Gesture,
}

impl Round {
    /// Outcome from the human's side.
    pub fn outcome(&self) -> RoundOutcome {
        self.human.versus(self.computer)
    }
}

/// Append-only record of rounds within one process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round.
    pub fn record(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// All rounds, oldest first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds recorded.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// True before the first round.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The human's most frequent gesture over the last `window` rounds.
    ///
    /// On a tie, the gesture that appears first inside the window wins.
    /// Returns `None` when there is nothing to look at.
    #[instrument(skip(self), fields(rounds = self.rounds.len()))]
    pub fn bias(&self, window: usize) -> Option<Gesture> {
        let start = self.rounds.len().saturating_sub(window);
        let recent = &self.rounds[start..];

        // (gesture, count) in order of first appearance
        let mut tally: Vec<(Gesture, usize)> = Vec::new();
        for round in recent {
            match tally.iter_mut().find(|(g, _)| *g == round.human) {
                Some((_, count)) => *count += 1,
                None => tally.push((round.human, 1)),
            }
        }

        let mut best: Option<(Gesture, usize)> = None;
        for (gesture, count) in tally {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((gesture, count));
            }
        }

        let bias = best.map(|(gesture, _)| gesture);
        trace!(?bias, "Human bias");
        bias
    }
}
