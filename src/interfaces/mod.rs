//! Host-facing adapters. Nothing in here is used by the evaluator itself.

pub mod csv;
