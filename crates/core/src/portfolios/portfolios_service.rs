use log::debug;
use std::sync::Arc;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing portfolios.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;
        debug!("Creating portfolio {}", new_portfolio.name);
        self.repository.create(new_portfolio)
    }

    fn update_portfolio(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio> {
        portfolio_update.validate()?;
        self.repository.update(portfolio_update)
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository
            .get_by_id(portfolio_id)?
            .ok_or_else(|| Error::NotFound(format!("Portfolio {}", portfolio_id)))
    }

    fn list_portfolios(&self, active_only: bool) -> Result<Vec<Portfolio>> {
        self.repository.list(active_only)
    }

    fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        if self.repository.delete(portfolio_id)? == 0 {
            return Err(Error::NotFound(format!("Portfolio {}", portfolio_id)));
        }
        Ok(())
    }
}
