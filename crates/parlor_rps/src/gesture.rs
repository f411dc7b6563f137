//! The five gestures and their relation table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A throw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gesture {
    /// Crushes scissors and lizard.
    Rock,
    /// Covers rock, disproves spock.
    Paper,
    /// Cuts paper, decapitates lizard.
    Scissors,
    /// Eats paper, poisons spock.
    Lizard,
    /// Smashes scissors, vaporizes rock.
    Spock,
}

/// Result of one throw against another, from the first thrower's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The first gesture wins.
    Win,
    /// The first gesture loses.
    Loss,
    /// Same gesture.
    Tie,
}

impl Gesture {
    /// All gestures, in menu order.
    pub const ALL: [Gesture; 5] = [
        Gesture::Rock,
        Gesture::Paper,
        Gesture::Scissors,
        Gesture::Lizard,
        Gesture::Spock,
    ];

    /// The two gestures this one defeats.
    pub fn defeats(self) -> [Gesture; 2] {
        use Gesture::*;
        match self {
            Rock => [Scissors, Lizard],
            Paper => [Rock, Spock],
            Scissors => [Paper, Lizard],
            Lizard => [Paper, Spock],
            Spock => [Rock, Scissors],
        }
    }

    /// True if `self` defeats `other`.
    pub fn beats(self, other: Gesture) -> bool {
        self.defeats().contains(&other)
    }

    /// True if `other` defeats `self`.
    pub fn loses_to(self, other: Gesture) -> bool {
        other.beats(self)
    }

    /// Gestures that defeat `self`.
    pub fn counters(self) -> Vec<Gesture> {
        Self::ALL.into_iter().filter(|g| g.beats(self)).collect()
    }

    /// Outcome of throwing `self` against `other`.
    #[instrument]
    pub fn versus(self, other: Gesture) -> RoundOutcome {
        if self.beats(other) {
            RoundOutcome::Win
        } else if self.loses_to(other) {
            RoundOutcome::Loss
        } else {
            RoundOutcome::Tie
        }
    }

    /// Parses a gesture name, case-insensitively and ignoring surrounding
    /// whitespace.
    pub fn parse(input: &str) -> Result<Self, GestureError> {
        let trimmed = input.trim();
        Gesture::from_str(trimmed).map_err(|_| GestureError {
            input: trimmed.to_string(),
        })
    }
}

/// Error returned for text that names no gesture.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("'{}' is not a gesture (choose rock, paper, scissors, lizard or spock)", input)]
pub struct GestureError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl std::error::Error for GestureError {}
