//! Balances module - daily balance snapshots per portfolio.

mod balances_model;
mod balances_service;
mod balances_traits;

#[cfg(test)]
mod balances_service_tests;

pub use balances_model::{NewPortfolioBalance, PortfolioBalance};
pub use balances_service::BalanceService;
pub use balances_traits::{BalanceRepositoryTrait, BalanceServiceTrait};
