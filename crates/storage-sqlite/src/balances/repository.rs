use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::upsert::excluded;
use std::sync::Arc;

use super::model::PortfolioBalanceDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::portfolio_balances;
use stockbook_core::balances::{BalanceRepositoryTrait, NewPortfolioBalance, PortfolioBalance};
use stockbook_core::errors::{Error, Result};

pub struct BalanceRepository {
    pool: Arc<DbPool>,
}

impl BalanceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl BalanceRepositoryTrait for BalanceRepository {
    fn upsert(&self, balance: NewPortfolioBalance) -> Result<PortfolioBalance> {
        let mut conn = get_connection(&self.pool)?;
        let balance_db: PortfolioBalanceDB = balance.into();

        let stored = conn
            .immediate_transaction::<_, StorageError, _>(|conn| {
                diesel::insert_into(portfolio_balances::table)
                    .values(&balance_db)
                    .on_conflict((
                        portfolio_balances::portfolio_id,
                        portfolio_balances::balance_date,
                    ))
                    .do_update()
                    .set((
                        portfolio_balances::final_balance
                            .eq(excluded(portfolio_balances::final_balance)),
                        portfolio_balances::withdrawals
                            .eq(excluded(portfolio_balances::withdrawals)),
                        portfolio_balances::deposits
                            .eq(excluded(portfolio_balances::deposits)),
                        portfolio_balances::index_change
                            .eq(excluded(portfolio_balances::index_change)),
                        portfolio_balances::updated_at
                            .eq(excluded(portfolio_balances::updated_at)),
                    ))
                    .execute(conn)?;

                Ok(portfolio_balances::table
                    .filter(portfolio_balances::portfolio_id.eq(&balance_db.portfolio_id))
                    .filter(portfolio_balances::balance_date.eq(balance_db.balance_date))
                    .select(PortfolioBalanceDB::as_select())
                    .first::<PortfolioBalanceDB>(conn)?)
            })?;

        Ok(PortfolioBalance::try_from(stored)?)
    }

    fn get_history(&self, portfolio_id: &str, limit: i64) -> Result<Vec<PortfolioBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolio_balances::table
            .filter(portfolio_balances::portfolio_id.eq(portfolio_id))
            .select(PortfolioBalanceDB::as_select())
            .order(portfolio_balances::balance_date.desc())
            .limit(limit)
            .load::<PortfolioBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| PortfolioBalance::try_from(row).map_err(Error::from))
            .collect()
    }

    fn get_by_date(
        &self,
        portfolio_id: &str,
        date: NaiveDate,
    ) -> Result<Option<PortfolioBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let found = portfolio_balances::table
            .filter(portfolio_balances::portfolio_id.eq(portfolio_id))
            .filter(portfolio_balances::balance_date.eq(date))
            .select(PortfolioBalanceDB::as_select())
            .first::<PortfolioBalanceDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(PortfolioBalance::try_from).transpose()?)
    }

    fn delete(&self, balance_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(portfolio_balances::table.find(balance_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_portfolio, setup_pool};
    use rust_decimal_macros::dec;
    use stockbook_core::Money;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn setup() -> (BalanceRepository, tempfile::TempDir) {
        let (pool, temp_dir) = setup_pool();
        insert_portfolio(&pool, "pf-1", "Main");
        insert_portfolio(&pool, "pf-2", "Side");
        (BalanceRepository::new(pool), temp_dir)
    }

    #[test]
    fn test_upsert_same_day_keeps_one_row_with_latest_values() {
        let (repo, _temp_dir) = setup();
        let first = repo
            .upsert(NewPortfolioBalance::new("pf-1", day(1), Money::new(1000).unwrap()))
            .unwrap();

        let mut second = NewPortfolioBalance::new("pf-1", day(1), Money::new("1500.55").unwrap());
        second.deposits = Money::new(400).unwrap();
        second.index_change = Some(dec!(1.25));
        let stored = repo.upsert(second).unwrap();

        assert_eq!(stored.id, first.id);
        assert_eq!(stored.final_balance.amount(), dec!(1500.55));
        assert_eq!(stored.deposits.amount(), dec!(400.00));
        assert_eq!(stored.index_change, Some(dec!(1.25)));

        let history = repo.get_history("pf-1", 10).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_is_newest_first_and_limited() {
        let (repo, _temp_dir) = setup();
        for d in [3, 1, 4, 2] {
            repo.upsert(NewPortfolioBalance::new("pf-1", day(d), Money::new(d).unwrap()))
                .unwrap();
        }
        repo.upsert(NewPortfolioBalance::new("pf-2", day(5), Money::new(5).unwrap()))
            .unwrap();

        let history = repo.get_history("pf-1", 3).unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|b| b.balance_date).collect();
        assert_eq!(dates, vec![day(4), day(3), day(2)]);
    }

    #[test]
    fn test_get_by_date_and_delete() {
        let (repo, _temp_dir) = setup();
        let stored = repo
            .upsert(NewPortfolioBalance::new("pf-1", day(9), Money::new("-12.5").unwrap()))
            .unwrap();
        let found = repo.get_by_date("pf-1", day(9)).unwrap().unwrap();
        assert_eq!(found.final_balance.amount(), dec!(-12.50));
        assert!(found.withdrawals.is_zero());
        assert!(repo.get_by_date("pf-1", day(8)).unwrap().is_none());

        assert_eq!(repo.delete(&stored.id).unwrap(), 1);
        assert!(repo.get_by_date("pf-1", day(9)).unwrap().is_none());
    }
}
