use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::StockDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::stocks;
use crate::schema::stocks::dsl::*;
use stockbook_core::errors::{Error, Result};
use stockbook_core::stocks::{NewStock, Stock, StockRepositoryTrait, StockUpdate};

/// Repository for the stock catalogue.
pub struct StockRepository {
    pool: Arc<DbPool>,
}

impl StockRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl StockRepositoryTrait for StockRepository {
    fn create(&self, new_stock: NewStock) -> Result<Stock> {
        let mut conn = get_connection(&self.pool)?;
        let stock_db: StockDB = new_stock.into();

        diesel::insert_into(stocks::table)
            .values(&stock_db)
            .execute(&mut conn)
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_unique_violation() {
                    Error::ConstraintViolation(format!(
                        "Stock with symbol {} already exists",
                        stock_db.symbol
                    ))
                } else {
                    err.into()
                }
            })?;

        debug!("Inserted stock {} ({})", stock_db.symbol, stock_db.id);
        Ok(Stock::try_from(stock_db)?)
    }

    fn update(&self, stock_update: StockUpdate) -> Result<Stock> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(stocks.find(&stock_update.id))
            .set((
                name.eq(&stock_update.name),
                industry.eq(&stock_update.industry),
                grade.eq(stock_update.grade.map(|g| g.as_str().to_string())),
                notes.eq(&stock_update.notes),
                updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .returning(StockDB::as_returning())
            .get_result::<StockDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound(format!("Stock {}", stock_update.id)))?;
        Ok(Stock::try_from(updated)?)
    }

    fn get_by_id(&self, stock_id: &str) -> Result<Option<Stock>> {
        let mut conn = get_connection(&self.pool)?;
        let found = stocks
            .find(stock_id)
            .select(StockDB::as_select())
            .first::<StockDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Stock::try_from).transpose()?)
    }

    fn get_by_symbol(&self, stock_symbol: &str) -> Result<Option<Stock>> {
        let mut conn = get_connection(&self.pool)?;
        let found = stocks
            .filter(symbol.eq(stock_symbol))
            .select(StockDB::as_select())
            .first::<StockDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Stock::try_from).transpose()?)
    }

    fn list(&self) -> Result<Vec<Stock>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stocks
            .select(StockDB::as_select())
            .order(symbol.asc())
            .load::<StockDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Stock::try_from(row).map_err(Error::from))
            .collect()
    }

    fn delete(&self, stock_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(stocks.find(stock_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}
