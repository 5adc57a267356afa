//! SQLite storage implementation for the trade ledger.

mod model;
mod repository;

pub use model::{LedgerRowDB, TransactionDB};
pub use repository::TransactionRepository;
