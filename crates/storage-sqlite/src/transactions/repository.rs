use diesel::prelude::*;
use std::sync::Arc;

use super::model::{LedgerRowDB, TransactionDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{stocks, transactions};
use stockbook_core::errors::{Error, Result};
use stockbook_core::transactions::{
    LedgerEntry, NewTransaction, Transaction, TransactionRepositoryTrait,
};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db: TransactionDB = new_transaction.into();

        diesel::insert_into(transactions::table)
            .values(&transaction_db)
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Transaction::try_from(transaction_db)?)
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let found = transactions::table
            .find(transaction_id)
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Transaction::try_from).transpose()?)
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::portfolio_id.eq(portfolio_id))
            .select(TransactionDB::as_select())
            .order((
                transactions::transaction_date.desc(),
                transactions::created_at.desc(),
                transactions::id.desc(),
            ))
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Transaction::try_from(row).map_err(Error::from))
            .collect()
    }

    fn list_ledger_entries(&self, portfolio_id: &str) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(stocks::table)
            .filter(transactions::portfolio_id.eq(portfolio_id))
            .select((
                transactions::stock_id,
                stocks::symbol,
                stocks::name,
                stocks::grade,
                transactions::transaction_type,
                transactions::quantity,
                transactions::price,
            ))
            .order((transactions::transaction_date.asc(), transactions::created_at.asc()))
            .load::<LedgerRowDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| LedgerEntry::try_from(row).map_err(Error::from))
            .collect()
    }

    fn delete(&self, transaction_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(transactions::table.find(transaction_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}
