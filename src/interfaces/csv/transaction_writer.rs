use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use std::io::Write;

/// Writes the transaction log as CSV (`from,to,amount,total`).
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(&mut self, records: &[TransactionRecord]) -> Result<()> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    #[test]
    fn test_write_records() {
        let mut buffer = Vec::new();
        TransactionWriter::new(&mut buffer)
            .write_records(&[TransactionRecord {
                from: "5106 0001".into(),
                to: "4276 0001".into(),
                amount: Money::new(500_00),
                total: Money::new(510_00),
            }])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "from,to,amount,total\n5106 0001,4276 0001,50000,51000\n");
    }
}
