//! Stock repository and service traits.

use super::stocks_model::{NewStock, Stock, StockUpdate};
use crate::errors::Result;

/// Contract for stock persistence.
///
/// Lookups return `Ok(None)` when the stock does not exist.
pub trait StockRepositoryTrait: Send + Sync {
    fn create(&self, new_stock: NewStock) -> Result<Stock>;

    fn update(&self, stock_update: StockUpdate) -> Result<Stock>;

    fn get_by_id(&self, stock_id: &str) -> Result<Option<Stock>>;

    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Stock>>;

    /// Lists every stock ordered by symbol.
    fn list(&self) -> Result<Vec<Stock>>;

    /// Returns the number of deleted rows.
    fn delete(&self, stock_id: &str) -> Result<usize>;
}

/// Contract for stock operations exposed to the presentation layer.
pub trait StockServiceTrait: Send + Sync {
    fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;

    fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock>;

    fn get_stock(&self, stock_id: &str) -> Result<Stock>;

    fn find_by_symbol(&self, symbol: &str) -> Result<Option<Stock>>;

    fn list_stocks(&self) -> Result<Vec<Stock>>;

    fn delete_stock(&self, stock_id: &str) -> Result<()>;
}
