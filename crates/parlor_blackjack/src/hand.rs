//! A hand of cards and its total.

use crate::Card;
use serde::{Deserialize, Serialize};

/// Totals above this bust.
pub const BUST_LIMIT: u32 = 21;

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards in the order they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Drops every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Best total: aces count 11, then drop to 1 one at a time while the
    /// hand is over [`BUST_LIMIT`].
    pub fn value(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(Card::value).sum();
        let mut aces = self.cards.iter().filter(|c| c.is_ace()).count();

        while total > BUST_LIMIT && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total
    }

    /// True when the total is over [`BUST_LIMIT`].
    pub fn is_busted(&self) -> bool {
        self.value() > BUST_LIMIT
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
