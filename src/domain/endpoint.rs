use super::card::CardId;
use serde::{Deserialize, Serialize};

/// Whether an unmatched card number is checked against the bank's issuer prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipCheck {
    /// An unknown number carrying the bank's prefix is an inconsistency.
    #[default]
    Strict,
    /// Every unknown number is treated as a third-party card.
    Lenient,
}

/// One side of a transfer after looking it up in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Issued by this bank and present in the directory.
    Inner(CardId),
    /// Issued by a third party.
    Outer,
    /// Not in the directory, yet numbered like one of ours.
    Inconsistent,
}

impl Endpoint {
    pub fn classify(
        found: Option<CardId>,
        number: &str,
        issuer_prefix: &str,
        check: OwnershipCheck,
    ) -> Self {
        match found {
            Some(id) => Self::Inner(id),
            None if check == OwnershipCheck::Strict && owned_by(number, issuer_prefix) => {
                Self::Inconsistent
            }
            None => Self::Outer,
        }
    }

    pub fn card(&self) -> Option<CardId> {
        match self {
            Self::Inner(id) => Some(*id),
            Self::Outer | Self::Inconsistent => None,
        }
    }

    pub fn is_inner(&self) -> bool {
        matches!(self, Self::Inner(_))
    }
}

/// An empty prefix claims nothing.
fn owned_by(number: &str, issuer_prefix: &str) -> bool {
    !issuer_prefix.is_empty() && number.starts_with(issuer_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_card_is_inner_regardless_of_prefix() {
        let endpoint = Endpoint::classify(Some(CardId(7)), "9999", "5106", OwnershipCheck::Strict);
        assert_eq!(endpoint, Endpoint::Inner(CardId(7)));
        assert_eq!(endpoint.card(), Some(CardId(7)));
    }

    #[test]
    fn test_unknown_foreign_number_is_outer() {
        let endpoint = Endpoint::classify(None, "4276 0000", "5106", OwnershipCheck::Strict);
        assert_eq!(endpoint, Endpoint::Outer);
        assert!(!endpoint.is_inner());
    }

    #[test]
    fn test_unknown_own_number_is_inconsistent_when_strict() {
        let endpoint = Endpoint::classify(None, "5106 2100", "5106", OwnershipCheck::Strict);
        assert_eq!(endpoint, Endpoint::Inconsistent);
        assert_eq!(endpoint.card(), None);
    }

    #[test]
    fn test_unknown_own_number_is_outer_when_lenient() {
        let endpoint = Endpoint::classify(None, "5106 2100", "5106", OwnershipCheck::Lenient);
        assert_eq!(endpoint, Endpoint::Outer);
    }

    #[test]
    fn test_empty_prefix_never_claims_ownership() {
        let endpoint = Endpoint::classify(None, "0002", "", OwnershipCheck::Strict);
        assert_eq!(endpoint, Endpoint::Outer);
    }
}
