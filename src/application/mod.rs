//! Application layer containing the transfer evaluation logic.
//!
//! `TransferService` classifies both ends of a card-to-card transfer, prices
//! it with the bank's commission table and drives the card directory and
//! transaction log in a fixed debit, credit, log order.

pub mod transfer;
