//! Balance ledger repository and service traits.

use chrono::NaiveDate;

use super::balances_model::{NewPortfolioBalance, PortfolioBalance};
use crate::errors::Result;

pub trait BalanceRepositoryTrait: Send + Sync {
    /// Inserts the snapshot or overwrites the one already stored for the
    /// same (portfolio, date). The row id of an overwritten snapshot is kept.
    fn upsert(&self, balance: NewPortfolioBalance) -> Result<PortfolioBalance>;

    /// Newest date first, at most `limit` rows.
    fn get_history(&self, portfolio_id: &str, limit: i64) -> Result<Vec<PortfolioBalance>>;

    fn get_by_date(&self, portfolio_id: &str, date: NaiveDate) -> Result<Option<PortfolioBalance>>;

    fn delete(&self, balance_id: &str) -> Result<usize>;
}

pub trait BalanceServiceTrait: Send + Sync {
    fn record_balance(&self, balance: NewPortfolioBalance) -> Result<PortfolioBalance>;

    /// Uses the configured default when `limit` is absent or not positive.
    fn get_history(&self, portfolio_id: &str, limit: Option<i64>) -> Result<Vec<PortfolioBalance>>;

    fn get_balance(&self, portfolio_id: &str, date: NaiveDate) -> Result<Option<PortfolioBalance>>;

    fn delete_balance(&self, balance_id: &str) -> Result<()>;
}
