use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a card held by a [`CardDirectory`](super::ports::CardDirectory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A payment card issued by the bank.
///
/// The balance never goes below zero: [`Card::withdraw`] refuses instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Payment network, e.g. "Visa".
    pub issuer: String,
    /// Balance in minor currency units.
    pub balance: Money,
    pub currency: String,
    /// Card number; the lookup key of the directory.
    pub number: String,
    #[serde(default)]
    pub icon: String,
}

impl Card {
    pub fn new(id: u64, issuer: &str, balance: i64, currency: &str, number: &str) -> Self {
        Self {
            id: CardId(id),
            issuer: issuer.to_string(),
            balance: Money::new(balance),
            currency: currency.to_string(),
            number: number.to_string(),
            icon: String::new(),
        }
    }

    /// Debits `amount` if the balance covers it. Leaves the card untouched otherwise.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    pub fn add_money(&mut self, amount: Money) {
        self.balance += amount;
    }
}
