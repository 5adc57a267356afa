use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::balances_model::{NewPortfolioBalance, PortfolioBalance};
use super::balances_traits::{BalanceRepositoryTrait, BalanceServiceTrait};
use crate::config::CoreConfig;
use crate::errors::{Error, Result};

pub struct BalanceService {
    repository: Arc<dyn BalanceRepositoryTrait>,
    config: Arc<CoreConfig>,
}

impl BalanceService {
    pub fn new(repository: Arc<dyn BalanceRepositoryTrait>, config: Arc<CoreConfig>) -> Self {
        Self { repository, config }
    }
}

impl BalanceServiceTrait for BalanceService {
    fn record_balance(&self, balance: NewPortfolioBalance) -> Result<PortfolioBalance> {
        balance.validate()?;
        debug!(
            "Recording balance {} for portfolio {} on {}",
            balance.final_balance, balance.portfolio_id, balance.balance_date
        );
        self.repository.upsert(balance)
    }

    fn get_history(&self, portfolio_id: &str, limit: Option<i64>) -> Result<Vec<PortfolioBalance>> {
        let limit = CoreConfig::resolve_limit(limit, self.config.balance_history_limit);
        self.repository.get_history(portfolio_id, limit)
    }

    fn get_balance(&self, portfolio_id: &str, date: NaiveDate) -> Result<Option<PortfolioBalance>> {
        self.repository.get_by_date(portfolio_id, date)
    }

    fn delete_balance(&self, balance_id: &str) -> Result<()> {
        if self.repository.delete(balance_id)? == 0 {
            return Err(Error::NotFound(format!("Balance {}", balance_id)));
        }
        Ok(())
    }
}
