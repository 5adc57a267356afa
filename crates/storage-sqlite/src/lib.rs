//! SQLite storage implementation for StockBook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stockbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! Repositories are synchronous. Multi-statement writes run inside an
//! immediate transaction so a failed step leaves nothing behind.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod balances;
pub mod journal;
pub mod portfolios;
pub mod positions;
pub mod stocks;
pub mod targets;
pub mod transactions;

// Re-export database utilities
pub use db::{backup_database, create_pool, get_connection, get_db_path, init, run_migrations};
pub use db::{DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use balances::BalanceRepository;
pub use journal::JournalRepository;
pub use portfolios::PortfolioRepository;
pub use positions::PositionRepository;
pub use stocks::StockRepository;
pub use targets::TargetRepository;
pub use transactions::TransactionRepository;

// Re-export from stockbook-core for convenience
pub use stockbook_core::errors::{DatabaseError, Error, Result};

#[cfg(test)]
pub(crate) mod test_support;
