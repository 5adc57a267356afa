use log::debug;
use std::sync::Arc;

use super::stocks_model::{NewStock, Stock, StockUpdate};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::config::CoreConfig;
use crate::errors::{Error, Result};

/// Service for managing the stock catalogue.
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
    config: Arc<CoreConfig>,
}

impl StockService {
    pub fn new(repository: Arc<dyn StockRepositoryTrait>, config: Arc<CoreConfig>) -> Self {
        Self { repository, config }
    }
}

impl StockServiceTrait for StockService {
    fn create_stock(&self, mut new_stock: NewStock) -> Result<Stock> {
        new_stock.symbol = new_stock.symbol.trim().to_uppercase();
        new_stock.name = new_stock.name.trim().to_string();
        new_stock.validate(self.config.max_symbol_length)?;
        debug!("Creating stock {}", new_stock.symbol);
        self.repository.create(new_stock)
    }

    fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock> {
        stock_update.validate()?;
        self.repository.update(stock_update)
    }

    fn get_stock(&self, stock_id: &str) -> Result<Stock> {
        self.repository
            .get_by_id(stock_id)?
            .ok_or_else(|| Error::NotFound(format!("Stock {}", stock_id)))
    }

    fn find_by_symbol(&self, symbol: &str) -> Result<Option<Stock>> {
        self.repository.get_by_symbol(&symbol.trim().to_uppercase())
    }

    fn list_stocks(&self) -> Result<Vec<Stock>> {
        self.repository.list()
    }

    fn delete_stock(&self, stock_id: &str) -> Result<()> {
        let deleted = self.repository.delete(stock_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Stock {}", stock_id)));
        }
        Ok(())
    }
}
