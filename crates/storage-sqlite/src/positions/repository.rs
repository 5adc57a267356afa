use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::PositionDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::positions;
use crate::utils::decimal_to_column;
use stockbook_core::errors::{Error, Result};
use stockbook_core::positions::{Position, PositionRepositoryTrait};

pub struct PositionRepository {
    pool: Arc<DbPool>,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn load(rows: Vec<PositionDB>) -> Result<Vec<Position>> {
        rows.into_iter()
            .map(|row| Position::try_from(row).map_err(Error::from))
            .collect()
    }
}

impl PositionRepositoryTrait for PositionRepository {
    fn create(&self, position: &Position) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;
        let position_db = PositionDB::from_domain(position);

        diesel::insert_into(positions::table)
            .values(&position_db)
            .execute(&mut conn)
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_unique_violation() {
                    Error::ConstraintViolation(format!(
                        "Position for portfolio {} and stock {} already exists",
                        position.portfolio_id(),
                        position.stock_id()
                    ))
                } else {
                    err.into()
                }
            })?;

        debug!("Inserted position {}", position.id());
        Ok(position.clone())
    }

    fn update(&self, position: &Position) -> Result<Position> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(positions::table.find(position.id()))
            .set((
                positions::quantity.eq(decimal_to_column(position.quantity().value())),
                positions::average_cost.eq(decimal_to_column(position.average_cost().amount())),
                positions::last_transaction_date
                    .eq(position.last_transaction_date().map(|d| d.naive_utc())),
                positions::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Position {}", position.id())));
        }
        Ok(position.clone())
    }

    fn get_by_id(&self, position_id: &str) -> Result<Option<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let found = positions::table
            .find(position_id)
            .select(PositionDB::as_select())
            .first::<PositionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Position::try_from).transpose()?)
    }

    fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = positions::table
            .filter(positions::portfolio_id.eq(portfolio_id))
            .select(PositionDB::as_select())
            .order(positions::created_at.asc())
            .load::<PositionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::load(rows)
    }

    fn get_by_portfolio_and_stock(
        &self,
        portfolio_id: &str,
        stock_id: &str,
    ) -> Result<Option<Position>> {
        let mut conn = get_connection(&self.pool)?;
        let found = positions::table
            .filter(positions::portfolio_id.eq(portfolio_id))
            .filter(positions::stock_id.eq(stock_id))
            .select(PositionDB::as_select())
            .first::<PositionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Position::try_from).transpose()?)
    }

    fn delete(&self, position_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(positions::table.find(position_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(deleted > 0)
    }

    fn delete_by_portfolio_and_stock(&self, portfolio_id: &str, stock_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(
            positions::table
                .filter(positions::portfolio_id.eq(portfolio_id))
                .filter(positions::stock_id.eq(stock_id)),
        )
        .execute(&mut conn)
        .map_err(StorageError::from)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_portfolio, insert_stock, setup_pool};
    use rust_decimal_macros::dec;
    use stockbook_core::{Money, Quantity};

    fn setup() -> (PositionRepository, tempfile::TempDir) {
        let (pool, temp_dir) = setup_pool();
        insert_portfolio(&pool, "pf-1", "Main");
        insert_stock(&pool, "stk-aapl", "AAPL", "Apple Inc.");
        (PositionRepository::new(pool), temp_dir)
    }

    fn position(quantity: &str, average_cost: &str) -> Position {
        Position::builder()
            .portfolio_id("pf-1")
            .stock_id("stk-aapl")
            .quantity(Quantity::new(quantity).unwrap())
            .average_cost(Money::new(average_cost).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_and_reload() {
        let (repo, _temp_dir) = setup();
        let mut created = position("0", "0");
        created
            .add_shares(Quantity::new("12.3456").unwrap(), Money::new("10.10").unwrap())
            .unwrap();
        repo.create(&created).unwrap();

        let loaded = repo
            .get_by_portfolio_and_stock("pf-1", "stk-aapl")
            .unwrap()
            .unwrap();
        assert_eq!(loaded.id(), created.id());
        assert_eq!(loaded.quantity().value(), dec!(12.3456));
        assert_eq!(loaded.average_cost().amount(), dec!(10.10));
        assert!(loaded.last_transaction_date().is_some());
    }

    #[test]
    fn test_duplicate_pair_is_constraint_violation() {
        let (repo, _temp_dir) = setup();
        repo.create(&position("1", "1")).unwrap();

        let err = repo.create(&position("2", "2")).unwrap_err();
        match err {
            Error::ConstraintViolation(message) => {
                assert_eq!(
                    message,
                    "Position for portfolio pf-1 and stock stk-aapl already exists"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_update_persists_share_movement() {
        let (repo, _temp_dir) = setup();
        let mut stored = repo.create(&position("100", "150")).unwrap();
        stored.remove_shares(Quantity::new("30").unwrap()).unwrap();
        repo.update(&stored).unwrap();

        let loaded = repo.get_by_id(stored.id()).unwrap().unwrap();
        assert_eq!(loaded.quantity().value(), dec!(70));
        assert_eq!(loaded.average_cost().amount(), dec!(150.00));
    }

    #[test]
    fn test_update_unknown_position_is_not_found() {
        let (repo, _temp_dir) = setup();
        let err = repo.update(&position("1", "1")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_missing_lookups_are_none() {
        let (repo, _temp_dir) = setup();
        assert!(repo.get_by_id("nope").unwrap().is_none());
        assert!(repo
            .get_by_portfolio_and_stock("pf-1", "stk-aapl")
            .unwrap()
            .is_none());
        assert!(repo.get_by_portfolio("pf-1").unwrap().is_empty());
    }

    #[test]
    fn test_delete_variants() {
        let (repo, _temp_dir) = setup();
        let first = repo.create(&position("1", "1")).unwrap();
        assert!(repo.delete(first.id()).unwrap());
        assert!(!repo.delete(first.id()).unwrap());

        repo.create(&position("1", "1")).unwrap();
        assert!(repo
            .delete_by_portfolio_and_stock("pf-1", "stk-aapl")
            .unwrap());
        assert!(!repo
            .delete_by_portfolio_and_stock("pf-1", "stk-aapl")
            .unwrap());
    }
}
