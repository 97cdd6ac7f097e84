use crate::domain::commission::Commissions;
use crate::domain::endpoint::OwnershipCheck;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Bank-wide settings for a transfer run.
///
/// Every field is optional in the JSON file; missing ones fall back to
/// [`BankConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub bank_name: String,
    /// Leading digits of every card number the bank issues.
    pub issuer_prefix: String,
    pub ownership_check: OwnershipCheck,
    pub commissions: Commissions,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: "Tinkoff".to_string(),
            issuer_prefix: "5106 21".to_string(),
            ownership_check: OwnershipCheck::Strict,
            commissions: Commissions::default(),
        }
    }
}

impl BankConfig {
    pub fn from_reader(source: impl Read) -> Result<Self> {
        let config: Self = serde_json::from_reader(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn validate(&self) -> Result<()> {
        if self.issuer_prefix.chars().any(|c| !c.is_ascii_digit() && c != ' ') {
            return Err(AppError::Config(format!(
                "issuer prefix {:?} must contain only digits and spaces",
                self.issuer_prefix
            )));
        }
        Ok(())
    }
}
