use crate::domain::money::Money;
use thiserror::Error;

/// Rejections produced by the transfer evaluator.
///
/// Every variant knows the total that was computed before the failure, so a
/// caller can explain a shortfall without re-running the commission math.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("attempt to transfer negative or zero sum")]
    InvalidAmount,
    #[error("card {0} not found in bank")]
    CardNotFound(String),
    #[error("not enough money on card to transfer {total}")]
    InsufficientFunds { total: Money },
}

impl TransferError {
    /// The total that would have been debited.
    pub fn total(&self) -> Money {
        match self {
            Self::InsufficientFunds { total } => *total,
            Self::InvalidAmount | Self::CardNotFound(_) => Money::ZERO,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
