//! Dealer policy and settlement.

use crate::Hand;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The dealer stands once the hand reaches this total.
pub const DEALER_STANDS_ON: u32 = 17;

/// Names the dealer is drawn from.
pub const DEALER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "C3P0"];

/// Who takes the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// True while the dealer must draw.
#[instrument(skip(hand), fields(value = hand.value()))]
pub fn dealer_hits(hand: &Hand) -> bool {
    let hits = hand.value() < DEALER_STANDS_ON;
    debug!(hits, "Dealer decision");
    hits
}

/// Settles a finished hand. Ties go to the dealer; a busted player loses
/// even if the dealer also busts.
#[instrument(skip_all, fields(player = player.value(), dealer = dealer.value()))]
pub fn settle(player: &Hand, dealer: &Hand) -> Winner {
    let dealer_wins =
        player.is_busted() || (player.value() <= dealer.value() && !dealer.is_busted());
    if dealer_wins {
        Winner::Dealer
    } else {
        Winner::Player
    }
}
