//! Database model for positions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_to_column, parse_money_column, parse_quantity_column};
use stockbook_core::positions::Position;

/// Database model for positions
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionDB {
    pub id: String,
    pub portfolio_id: String,
    pub stock_id: String,
    pub quantity: String,
    pub average_cost: String,
    pub last_transaction_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PositionDB {
    pub fn from_domain(position: &Position) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: position.id().to_string(),
            portfolio_id: position.portfolio_id().to_string(),
            stock_id: position.stock_id().to_string(),
            quantity: decimal_to_column(position.quantity().value()),
            average_cost: decimal_to_column(position.average_cost().amount()),
            last_transaction_date: position.last_transaction_date().map(|d| d.naive_utc()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Rebuilds the aggregate through its builder so stored rows obey the same
/// invariants as fresh ones.
impl TryFrom<PositionDB> for Position {
    type Error = StorageError;

    fn try_from(db: PositionDB) -> Result<Self, Self::Error> {
        let mut builder = Position::builder()
            .id(db.id)
            .portfolio_id(db.portfolio_id)
            .stock_id(db.stock_id)
            .quantity(parse_quantity_column(&db.quantity, "positions.quantity")?)
            .average_cost(parse_money_column(&db.average_cost, "positions.average_cost")?);
        if let Some(stamp) = db.last_transaction_date {
            builder = builder.last_transaction_date(stamp.and_utc());
        }
        Ok(builder.build()?)
    }
}
