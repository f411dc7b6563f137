//! Parlor twenty-one.
//!
//! - **Card / Deck**: a 52-card deck that reshuffles itself when exhausted
//! - **Hand**: totals with soft aces
//! - **Rules**: dealer drawing policy and settlement
//! - **Wallet**: the player's cash and current wager

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod deck;
mod hand;
mod rules;
mod wallet;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{BUST_LIMIT, Hand};
pub use rules::{DEALER_NAMES, DEALER_STANDS_ON, Winner, dealer_hits, settle};
pub use wallet::{BetError, Standing, Wallet};
