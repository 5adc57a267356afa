//! StockBook Core - Domain entities, services, and traits.
//!
//! This crate contains the bookkeeping logic for StockBook: the `Money` and
//! `Quantity` value types, the `Position` aggregate with its weighted-average
//! cost accounting, the holdings projection over the transaction ledger, the
//! portfolio balance ledger and the trading journal.
//!
//! It is database-agnostic and defines repository traits that are implemented
//! by the `storage-sqlite` crate.

pub mod balances;
pub mod config;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod journal;
pub mod money;
pub mod portfolios;
pub mod positions;
pub mod stocks;
pub mod targets;
pub mod transactions;
pub mod utils;

// Re-export the value types, they are used everywhere
pub use money::{IntoDecimal, Money, Quantity};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
