use super::money::Money;
use serde::{Deserialize, Serialize};

/// A completed transfer as appended to the [`TransactionLog`](super::ports::TransactionLog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub from: String,
    pub to: String,
    pub amount: Money,
    /// Amount plus every commission charged to the source.
    pub total: Money,
}

impl TransactionRecord {
    pub fn commission(&self) -> Money {
        self.total - self.amount
    }
}

/// A request to move `amount` from one card number to another.
///
/// The amount is kept raw here; validation belongs to the evaluator so that a
/// non-positive amount is reported as a transfer rejection, not a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: i64,
}
