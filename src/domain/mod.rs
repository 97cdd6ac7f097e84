//! Domain model: cards, money, commissions and the ports the evaluator drives.

pub mod card;
pub mod commission;
pub mod endpoint;
pub mod money;
pub mod ports;
pub mod transaction;
