//! Position repository and service traits.

use super::positions_model::Position;
use crate::errors::Result;
use crate::money::{Money, Quantity};

/// Persistence contract for positions.
///
/// Lookups return `Ok(None)` when nothing matches. Creating a second position
/// for the same (portfolio, stock) pair fails with
/// `Error::ConstraintViolation` naming both ids.
pub trait PositionRepositoryTrait: Send + Sync {
    fn create(&self, position: &Position) -> Result<Position>;

    fn update(&self, position: &Position) -> Result<Position>;

    fn get_by_id(&self, position_id: &str) -> Result<Option<Position>>;

    fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Position>>;

    fn get_by_portfolio_and_stock(
        &self,
        portfolio_id: &str,
        stock_id: &str,
    ) -> Result<Option<Position>>;

    /// Returns true when a row was removed.
    fn delete(&self, position_id: &str) -> Result<bool>;

    fn delete_by_portfolio_and_stock(&self, portfolio_id: &str, stock_id: &str) -> Result<bool>;
}

pub trait PositionServiceTrait: Send + Sync {
    fn get_positions(&self, portfolio_id: &str) -> Result<Vec<Position>>;

    fn get_position(&self, portfolio_id: &str, stock_id: &str) -> Result<Option<Position>>;

    /// Adds bought shares, opening the position on first acquisition.
    fn apply_buy(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
        price: Money,
    ) -> Result<Position>;

    /// Removes sold shares from an existing position.
    ///
    /// A closed position is deleted when the service is configured to do so;
    /// the returned value is the final state either way.
    fn apply_sell(&self, portfolio_id: &str, stock_id: &str, quantity: Quantity)
        -> Result<Position>;

    /// Checks that a purchase would succeed without writing anything.
    fn check_buy(
        &self,
        portfolio_id: &str,
        stock_id: &str,
        quantity: Quantity,
        price: Money,
    ) -> Result<()>;

    /// Checks that a sale would succeed without writing anything.
    fn check_sell(&self, portfolio_id: &str, stock_id: &str, quantity: Quantity) -> Result<()>;

    fn delete_position(&self, position_id: &str) -> Result<()>;
}
