//! Playing cards.

use serde::{Deserialize, Serialize};

/// Card rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace, counted 11 until the hand would bust
    Ace,
}

impl Rank {
    /// Face value; aces count 11 here and are softened by [`Hand`](crate::Hand).
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Jack => write!(f, "Jack"),
            Rank::Queen => write!(f, "Queen"),
            Rank::King => write!(f, "King"),
            Rank::Ace => write!(f, "Ace"),
            pip => write!(f, "{}", pip.value()),
        }
    }
}

/// Card suit.
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
    strum::EnumIter,
)]
pub enum Suit {
    /// Diamonds
    Diamonds,
    /// Clubs
    Clubs,
    /// Hearts
    Hearts,
    /// Spades
    Spades,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} of {}", rank, suit)]
pub struct Card {
    /// Rank.
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
}

impl Card {
    /// Creates a card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Shorthand for `self.rank.value()`.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// True for aces.
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
    }

    #[test]
    fn test_values() {
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Seven.value(), 7);
    }
}
