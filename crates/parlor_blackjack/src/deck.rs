//! A shuffled 52-card deck.

use crate::{Card, Rank, Suit};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// A deck that rebuilds and reshuffles itself when it runs out.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    shuffles: u32,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Builds and shuffles a full deck.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Self::SIZE),
            shuffles: 0,
        };
        deck.reshuffle(rng);
        deck
    }

    /// Replaces the remaining cards with a fresh shuffled deck.
    #[instrument(skip(self, rng))]
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        self.cards.shuffle(rng);
        self.shuffles += 1;
        info!(shuffles = self.shuffles, "Deck shuffled");
    }

    /// Deals the top card, reshuffling first if the deck is empty.
    #[instrument(skip(self, rng), fields(remaining = self.cards.len()))]
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle(rng);
        }
    }

    /// Cards left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// How many times the deck has been shuffled, including the first.
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }
}
