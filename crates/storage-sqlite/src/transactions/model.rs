//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_to_column, parse_enum_column, parse_money_column, parse_quantity_column};
use stockbook_core::stocks::StockGrade;
use stockbook_core::transactions::{LedgerEntry, NewTransaction, Transaction, TransactionType};
use stockbook_core::utils::new_id;

/// Database model for transactions
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub portfolio_id: String,
    pub stock_id: String,
    pub transaction_type: String,
    pub quantity: String,
    pub price: String,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_type: parse_enum_column(&db.transaction_type, "transactions.transaction_type")?,
            quantity: parse_quantity_column(&db.quantity, "transactions.quantity")?,
            price: parse_money_column(&db.price, "transactions.price")?,
            id: db.id,
            portfolio_id: db.portfolio_id,
            stock_id: db.stock_id,
            transaction_date: db.transaction_date,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_else(new_id),
            portfolio_id: domain.portfolio_id,
            stock_id: domain.stock_id,
            transaction_type: domain.transaction_type.as_str().to_string(),
            quantity: decimal_to_column(domain.quantity.value()),
            price: decimal_to_column(domain.price.amount()),
            transaction_date: domain.transaction_date,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A transaction row joined with its stock.
#[derive(Queryable, Debug, Clone)]
pub struct LedgerRowDB {
    pub stock_id: String,
    pub symbol: String,
    pub name: String,
    pub grade: Option<String>,
    pub transaction_type: String,
    pub quantity: String,
    pub price: String,
}

impl TryFrom<LedgerRowDB> for LedgerEntry {
    type Error = StorageError;

    fn try_from(db: LedgerRowDB) -> Result<Self, Self::Error> {
        let grade = db
            .grade
            .as_deref()
            .map(|g| parse_enum_column::<StockGrade>(g, "stocks.grade"))
            .transpose()?;
        Ok(Self {
            transaction_type: parse_enum_column::<TransactionType>(
                &db.transaction_type,
                "transactions.transaction_type",
            )?,
            quantity: parse_quantity_column(&db.quantity, "transactions.quantity")?,
            price: parse_money_column(&db.price, "transactions.price")?,
            stock_id: db.stock_id,
            symbol: db.symbol,
            name: db.name,
            grade,
        })
    }
}
