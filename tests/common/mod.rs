#![allow(dead_code)]

use cardxfer::application::transfer::TransferService;
use cardxfer::domain::card::{Card, CardId};
use cardxfer::domain::commission::{CommissionRule, Commissions};
use cardxfer::domain::money::Money;
use cardxfer::infrastructure::in_memory::{InMemoryCardDirectory, InMemoryTransactionLog};

/// Tariff used across the test suite: 0.5% (min 10.00) from our cards,
/// free to our cards, 1.5% (min 30.00) between third-party cards.
pub fn tariff() -> Commissions {
    Commissions {
        from_inner: CommissionRule::Custom(|val| (val * 5 / 1000).max(10_00)),
        to_inner: CommissionRule::Custom(|_| 0),
        from_outer_to_outer: CommissionRule::Custom(|val| (val * 15 / 1000).max(30_00)),
    }
}

pub fn card(id: u64, balance: i64, number: &str) -> Card {
    Card::new(id, "Visa", balance, "RUB", number)
}

pub fn service_with(prefix: &str, cards: Vec<Card>) -> TransferService {
    TransferService::new(
        Box::new(InMemoryCardDirectory::with_cards(prefix, cards)),
        Box::new(InMemoryTransactionLog::new()),
        tariff(),
    )
}

pub fn balance_of(service: &TransferService, id: u64) -> Money {
    service
        .cards()
        .card(CardId(id))
        .expect("card should exist")
        .balance
}

pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
