use diesel::prelude::*;
use std::sync::Arc;

use super::model::PortfolioDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::portfolios;
use crate::schema::portfolios::dsl::*;
use stockbook_core::errors::{Error, Result};
use stockbook_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioUpdate,
};

pub struct PortfolioRepository {
    pool: Arc<DbPool>,
}

impl PortfolioRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PortfolioRepositoryTrait for PortfolioRepository {
    fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        let mut conn = get_connection(&self.pool)?;
        let portfolio_db: PortfolioDB = new_portfolio.into();

        let inserted = diesel::insert_into(portfolios::table)
            .values(&portfolio_db)
            .returning(PortfolioDB::as_returning())
            .get_result::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(inserted.into())
    }

    fn update(&self, portfolio_update: PortfolioUpdate) -> Result<Portfolio> {
        let mut conn = get_connection(&self.pool)?;
        diesel::update(portfolios.find(&portfolio_update.id))
            .set((
                name.eq(portfolio_update.name.trim()),
                description.eq(&portfolio_update.description),
                is_active.eq(portfolio_update.is_active),
                updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .returning(PortfolioDB::as_returning())
            .get_result::<PortfolioDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Portfolio::from)
            .ok_or_else(|| Error::NotFound(format!("Portfolio {}", portfolio_update.id)))
    }

    fn get_by_id(&self, portfolio_id: &str) -> Result<Option<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let found = portfolios
            .find(portfolio_id)
            .select(PortfolioDB::as_select())
            .first::<PortfolioDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Portfolio::from))
    }

    fn list(&self, active_only: bool) -> Result<Vec<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = portfolios.select(PortfolioDB::as_select()).into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        let rows = query
            .order(name.asc())
            .load::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Portfolio::from).collect())
    }

    fn delete(&self, portfolio_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(portfolios.find(portfolio_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}
