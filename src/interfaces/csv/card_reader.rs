use crate::domain::card::Card;
use crate::error::{AppError, Result};
use std::collections::HashSet;
use std::io::Read;

/// Reads the bank's cards from a CSV source.
///
/// Expected header: `id,issuer,balance,currency,number,icon`. Rows may stop
/// before the trailing icon column.
pub struct CardReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CardReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every card, rejecting negative opening balances and reused card numbers.
    pub fn cards(mut self) -> Result<Vec<Card>> {
        let headers = self.reader.headers()?.clone();
        let mut numbers = HashSet::new();
        let mut cards = Vec::new();

        for record in self.reader.records() {
            let mut record = record?;
            while record.len() < headers.len() {
                record.push_field("");
            }
            let card: Card = record.deserialize(Some(&headers))?;

            if card.balance.value() < 0 {
                return Err(AppError::Config(format!(
                    "card {} has a negative balance",
                    card.number
                )));
            }
            if !numbers.insert(card.number.clone()) {
                return Err(AppError::Config(format!(
                    "card number {} is listed more than once",
                    card.number
                )));
            }
            cards.push(card);
        }
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    #[test]
    fn test_reader_valid_cards() {
        let data = "id, issuer, balance, currency, number, icon\n\
                    1, Visa, 100000, RUB, 5106 0001, visa.png\n\
                    2, MasterCard, 0, RUB, 5106 0002";
        let cards = CardReader::new(data.as_bytes()).cards().unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].balance, Money::new(100000));
        assert_eq!(cards[0].icon, "visa.png");
        assert_eq!(cards[1].number, "5106 0002");
        assert_eq!(cards[1].icon, "");
    }

    #[test]
    fn test_reader_rejects_negative_balance() {
        let data = "id, issuer, balance, currency, number\n1, Visa, -1, RUB, 5106 0001";
        let result = CardReader::new(data.as_bytes()).cards();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_reader_pads_row_without_icon() {
        let data = "id, issuer, balance, currency, number, icon\n\
                    1, Visa, 500, RUB, 5106 0001";
        let cards = CardReader::new(data.as_bytes()).cards().unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].number, "5106 0001");
        assert_eq!(cards[0].balance, Money::new(500));
        assert_eq!(cards[0].icon, "");
    }

    #[test]
    fn test_reader_rejects_duplicate_numbers() {
        let data = "id, issuer, balance, currency, number\n\
                    1, Visa, 100, RUB, 5106 0001\n\
                    2, Visa, 200, RUB, 5106 0001";
        let result = CardReader::new(data.as_bytes()).cards();

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("more than once")));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id, issuer, balance, currency, number\nx, Visa, 1, RUB, 5106 0001";
        let result = CardReader::new(data.as_bytes()).cards();

        assert!(matches!(result, Err(AppError::Csv(_))));
    }
}
