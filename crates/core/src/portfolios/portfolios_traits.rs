//! Portfolio repository and service traits.

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::errors::Result;

pub trait PortfolioRepositoryTrait: Send + Sync {
    fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    fn update(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio>;

    fn get_by_id(&self, portfolio_id: &str) -> Result<Option<Portfolio>>;

    /// Lists portfolios ordered by name, optionally only the active ones.
    fn list(&self, active_only: bool) -> Result<Vec<Portfolio>>;

    fn delete(&self, portfolio_id: &str) -> Result<usize>;
}

pub trait PortfolioServiceTrait: Send + Sync {
    fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    fn update_portfolio(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio>;

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;

    fn list_portfolios(&self, active_only: bool) -> Result<Vec<Portfolio>>;

    fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;
}
