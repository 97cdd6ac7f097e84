pub mod card_reader;
pub mod card_writer;
pub mod transaction_writer;
pub mod transfer_reader;
