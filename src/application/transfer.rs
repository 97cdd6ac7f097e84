use crate::domain::commission::Commissions;
use crate::domain::endpoint::{Endpoint, OwnershipCheck};
use crate::domain::money::{Amount, Money};
use crate::domain::ports::{CardDirectory, CardDirectoryBox, TransactionLog, TransactionLogBox};
use crate::domain::transaction::{TransactionRecord, TransferRequest};
use crate::error::TransferError;
use tracing::{debug, info, warn};

/// Evaluates card-to-card transfers.
///
/// `TransferService` owns the card directory and the transaction log it was
/// built with, plus an immutable commission table. It performs no locking of
/// its own: atomicity of a single debit is the directory's job.
pub struct TransferService {
    cards: CardDirectoryBox,
    transactions: TransactionLogBox,
    commissions: Commissions,
    ownership_check: OwnershipCheck,
}

impl TransferService {
    /// Creates a new `TransferService` with the strict ownership check.
    ///
    /// # Arguments
    ///
    /// * `cards` - The bank's card directory.
    /// * `transactions` - The log completed transfers are appended to.
    /// * `commissions` - The tariff applied to every transfer.
    pub fn new(
        cards: CardDirectoryBox,
        transactions: TransactionLogBox,
        commissions: Commissions,
    ) -> Self {
        Self {
            cards,
            transactions,
            commissions,
            ownership_check: OwnershipCheck::default(),
        }
    }

    pub fn with_ownership_check(mut self, ownership_check: OwnershipCheck) -> Self {
        self.ownership_check = ownership_check;
        self
    }

    pub fn cards(&self) -> &dyn CardDirectory {
        self.cards.as_ref()
    }

    pub fn transactions(&self) -> &dyn TransactionLog {
        self.transactions.as_ref()
    }

    /// Moves `amount` from card `from` to card `to` and returns the total debited.
    ///
    /// On failure the error still carries the total that was computed, see
    /// [`TransferError::total`]. Side effects happen in a fixed order (debit,
    /// credit, log) and stop at the first failure.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn card_to_card(&self, from: &str, to: &str, amount: i64) -> Result<Money, TransferError> {
        let amount = Amount::new(amount).inspect_err(|_| {
            warn!(from, to, amount, "Rejected non-positive transfer amount");
        })?;

        let source = self.classify(from)?;
        let destination = self.classify(to)?;

        let commission = self.commission(source, destination, amount);
        let total = Money::from(amount) + commission;
        debug!(?source, ?destination, %commission, %total, "Transfer priced");

        if let Some(card) = source.card()
            && !self.cards.withdraw(card, total)
        {
            warn!(from, %total, "Not enough money on source card");
            return Err(TransferError::InsufficientFunds { total });
        }

        if let Some(card) = destination.card() {
            self.cards.add_money(card, amount.into());
        }

        self.transactions.add(TransactionRecord {
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.into(),
            total,
        });

        info!(from, to, amount = amount.value(), %total, "Transfer completed");
        Ok(total)
    }

    /// Evaluates a parsed [`TransferRequest`].
    pub fn execute(&self, request: &TransferRequest) -> Result<Money, TransferError> {
        self.card_to_card(&request.from, &request.to, request.amount)
    }

    fn classify(&self, number: &str) -> Result<Endpoint, TransferError> {
        let endpoint = Endpoint::classify(
            self.cards.find_card(number),
            number,
            self.cards.issuer_prefix(),
            self.ownership_check,
        );
        match endpoint {
            Endpoint::Inconsistent => {
                warn!(number, "Card carries the bank's prefix but is not in the directory");
                Err(TransferError::CardNotFound(number.to_string()))
            }
            endpoint => Ok(endpoint),
        }
    }

    fn commission(&self, source: Endpoint, destination: Endpoint, amount: Amount) -> Money {
        if !source.is_inner() && !destination.is_inner() {
            return self.commissions.from_outer_to_outer.evaluate(amount);
        }

        let mut commission = Money::ZERO;
        if destination.is_inner() {
            commission += self.commissions.to_inner.evaluate(amount);
        }
        if source.is_inner() {
            commission += self.commissions.from_inner.evaluate(amount);
        }
        commission
    }
}
