use crate::domain::card::{Card, CardId};
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct BalanceRow<'a> {
    id: CardId,
    number: &'a str,
    currency: &'a str,
    balance: Money,
}

/// Writes card balances as CSV (`id,number,currency,balance`).
pub struct CardWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CardWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<()> {
        for card in cards {
            self.writer.serialize(BalanceRow {
                id: card.id,
                number: &card.number,
                currency: &card.currency,
                balance: card.balance,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
