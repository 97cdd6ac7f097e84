use super::card::{Card, CardId};
use super::money::Money;
use super::transaction::TransactionRecord;

/// The bank's card registry. Owns every balance.
///
/// Implementations must make `withdraw` atomic with its balance check and
/// serialise mutations of the same card.
pub trait CardDirectory: Send + Sync {
    fn find_card(&self, number: &str) -> Option<CardId>;
    /// Debits `amount` iff the balance covers it.
    fn withdraw(&self, card: CardId, amount: Money) -> bool;
    fn add_money(&self, card: CardId, amount: Money);
    /// Leading digits shared by every card number the bank issues.
    fn issuer_prefix(&self) -> &str;
    fn card(&self, card: CardId) -> Option<Card>;
    fn all_cards(&self) -> Vec<Card>;
}

/// Append-only record of completed transfers.
pub trait TransactionLog: Send + Sync {
    fn add(&self, record: TransactionRecord);
    fn records(&self) -> Vec<TransactionRecord>;
}

pub type CardDirectoryBox = Box<dyn CardDirectory>;
pub type TransactionLogBox = Box<dyn TransactionLog>;
