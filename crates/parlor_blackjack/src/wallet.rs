//! The player's bankroll.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How the player leaves the table compared to how they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    /// More cash than at the start.
    Profit,
    /// Exactly the starting cash.
    BreakEven,
    /// Less cash, but not broke.
    PartialLoss,
    /// Nothing left.
    TotalLoss,
}

/// Rejected wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BetError {
    /// Wagers must be positive.
    #[display("Please enter an amount greater than 0.")]
    Zero,
    /// Wager above the cash on hand.
    #[display("Please enter an amount you can afford (you have ${}).", cash)]
    Insufficient {
        /// Cash available.
        cash: u64,
    },
}

impl std::error::Error for BetError {}

/// Cash on hand plus the wager riding on the current hand.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Wallet {
    /// Current cash.
    cash: u64,
    /// Cash brought to the table.
    starting_cash: u64,
    /// Amount riding on the current hand.
    wager: u64,
}

impl Wallet {
    /// Sits down with `cash`.
    pub fn new(cash: u64) -> Self {
        Self {
            cash,
            starting_cash: cash,
            wager: 0,
        }
    }

    /// Validates a wager without placing it.
    pub fn check_bet(&self, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::Zero);
        }
        if amount > self.cash {
            return Err(BetError::Insufficient { cash: self.cash });
        }
        Ok(())
    }

    /// Stakes `amount` on the next hand.
    #[instrument(skip(self), fields(cash = self.cash))]
    pub fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        self.check_bet(amount)?;
        self.wager = amount;
        Ok(())
    }

    /// Collects the wager. Winnings stop at `u64::MAX`.
    #[instrument(skip(self), fields(wager = self.wager))]
    pub fn resolve_win(&mut self) {
        self.cash = self.cash.saturating_add(self.wager);
        self.wager = 0;
        info!(cash = self.cash, "Wager won");
    }

    /// Forfeits the wager.
    #[instrument(skip(self), fields(wager = self.wager))]
    pub fn resolve_loss(&mut self) {
        self.cash = self.cash.saturating_sub(self.wager);
        self.wager = 0;
        info!(cash = self.cash, "Wager lost");
    }

    /// True once the cash is gone.
    pub fn is_broke(&self) -> bool {
        self.cash == 0
    }

    /// Current cash compared to the starting cash.
    pub fn standing(&self) -> Standing {
        if self.cash > self.starting_cash {
            Standing::Profit
        } else if self.cash == self.starting_cash {
            Standing::BreakEven
        } else if self.cash > 0 {
            Standing::PartialLoss
        } else {
            Standing::TotalLoss
        }
    }
}
