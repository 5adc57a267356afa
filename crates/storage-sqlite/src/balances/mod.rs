//! SQLite storage implementation for portfolio balance snapshots.

mod model;
mod repository;

pub use model::PortfolioBalanceDB;
pub use repository::BalanceRepository;
