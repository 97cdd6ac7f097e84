use crate::domain::card::{Card, CardId};
use crate::domain::money::Money;
use crate::domain::ports::{CardDirectory, TransactionLog};
use crate::domain::transaction::TransactionRecord;
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A thread-safe in-memory card directory.
///
/// Cards live in a `DashMap` keyed by id; `withdraw` and `add_money` hold the
/// entry's write guard for the whole check-and-mutate, so concurrent
/// transfers touching the same card are serialised. Clones share state.
#[derive(Default, Clone)]
pub struct InMemoryCardDirectory {
    issuer_prefix: String,
    cards: Arc<DashMap<CardId, Card>>,
    numbers: Arc<DashMap<String, CardId>>,
}

impl InMemoryCardDirectory {
    /// Creates an empty directory for a bank whose card numbers start with `issuer_prefix`.
    pub fn new(issuer_prefix: impl Into<String>) -> Self {
        Self {
            issuer_prefix: issuer_prefix.into(),
            ..Self::default()
        }
    }

    pub fn with_cards(
        issuer_prefix: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        let directory = Self::new(issuer_prefix);
        for card in cards {
            directory.insert(card);
        }
        directory
    }

    /// Adds or replaces a card, indexed by its number.
    pub fn insert(&self, card: Card) -> CardId {
        let id = card.id;
        if let Some(previous) = self.cards.insert(id, card.clone())
            && previous.number != card.number
        {
            self.numbers.remove(&previous.number);
        }
        self.numbers.insert(card.number, id);
        id
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardDirectory for InMemoryCardDirectory {
    fn find_card(&self, number: &str) -> Option<CardId> {
        self.numbers.get(number).map(|id| *id)
    }

    fn withdraw(&self, card: CardId, amount: Money) -> bool {
        self.cards
            .get_mut(&card)
            .is_some_and(|mut card| card.withdraw(amount))
    }

    fn add_money(&self, card: CardId, amount: Money) {
        if let Some(mut card) = self.cards.get_mut(&card) {
            card.add_money(amount);
        }
    }

    fn issuer_prefix(&self) -> &str {
        &self.issuer_prefix
    }

    fn card(&self, card: CardId) -> Option<Card> {
        self.cards.get(&card).map(|card| card.clone())
    }

    fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.iter().map(|card| card.clone()).collect();
        cards.sort_by_key(|card| card.id);
        cards
    }
}

/// A thread-safe in-memory transaction log.
///
/// Records are kept in append order.
#[derive(Default, Clone)]
pub struct InMemoryTransactionLog {
    records: Arc<Mutex<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionLog {
    /// Creates a new, empty in-memory transaction log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionLog for InMemoryTransactionLog {
    fn add(&self, record: TransactionRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    fn records(&self) -> Vec<TransactionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
