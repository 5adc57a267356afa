//! Database model for portfolio balance snapshots.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_to_column, parse_decimal_column, parse_money_column};
use stockbook_core::balances::{NewPortfolioBalance, PortfolioBalance};
use stockbook_core::utils::new_id;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_balances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioBalanceDB {
    pub id: String,
    pub portfolio_id: String,
    pub balance_date: NaiveDate,
    pub final_balance: String,
    pub withdrawals: String,
    pub deposits: String,
    pub index_change: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<PortfolioBalanceDB> for PortfolioBalance {
    type Error = StorageError;

    fn try_from(db: PortfolioBalanceDB) -> Result<Self, Self::Error> {
        let index_change = db
            .index_change
            .as_deref()
            .map(|v| parse_decimal_column(v, "portfolio_balances.index_change"))
            .transpose()?;
        Ok(Self {
            final_balance: parse_money_column(&db.final_balance, "portfolio_balances.final_balance")?,
            withdrawals: parse_money_column(&db.withdrawals, "portfolio_balances.withdrawals")?,
            deposits: parse_money_column(&db.deposits, "portfolio_balances.deposits")?,
            index_change,
            id: db.id,
            portfolio_id: db.portfolio_id,
            balance_date: db.balance_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewPortfolioBalance> for PortfolioBalanceDB {
    fn from(domain: NewPortfolioBalance) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: new_id(),
            portfolio_id: domain.portfolio_id,
            balance_date: domain.balance_date,
            final_balance: decimal_to_column(domain.final_balance.amount()),
            withdrawals: decimal_to_column(domain.withdrawals.amount()),
            deposits: decimal_to_column(domain.deposits.amount()),
            index_change: domain.index_change.map(decimal_to_column),
            created_at: now,
            updated_at: now,
        }
    }
}
