use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_to_column, parse_enum_column, parse_money_column};
use stockbook_core::targets::{NewTarget, Target, TargetStatus};
use stockbook_core::utils::new_id;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::targets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TargetDB {
    pub id: String,
    pub portfolio_id: String,
    pub stock_id: String,
    pub target_price: String,
    pub stop_price: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<TargetDB> for Target {
    type Error = StorageError;

    fn try_from(db: TargetDB) -> Result<Self, Self::Error> {
        let stop_price = db
            .stop_price
            .as_deref()
            .map(|v| parse_money_column(v, "targets.stop_price"))
            .transpose()?;
        Ok(Self {
            target_price: parse_money_column(&db.target_price, "targets.target_price")?,
            stop_price,
            status: parse_enum_column(&db.status, "targets.status")?,
            id: db.id,
            portfolio_id: db.portfolio_id,
            stock_id: db.stock_id,
            reason: db.reason,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewTarget> for TargetDB {
    fn from(domain: NewTarget) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_else(new_id),
            portfolio_id: domain.portfolio_id,
            stock_id: domain.stock_id,
            target_price: decimal_to_column(domain.target_price.amount()),
            stop_price: domain.stop_price.map(|p| decimal_to_column(p.amount())),
            reason: domain.reason,
            status: TargetStatus::Active.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
