//! Database model for stocks.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::parse_enum_column;
use stockbook_core::stocks::{NewStock, Stock, StockGrade};
use stockbook_core::utils::new_id;

/// Database model for stocks
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::stocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockDB {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub grade: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<StockDB> for Stock {
    type Error = StorageError;

    fn try_from(db: StockDB) -> Result<Self, Self::Error> {
        let grade = db
            .grade
            .as_deref()
            .map(|g| parse_enum_column::<StockGrade>(g, "stocks.grade"))
            .transpose()?;
        Ok(Self {
            id: db.id,
            symbol: db.symbol,
            name: db.name,
            industry: db.industry,
            grade,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewStock> for StockDB {
    fn from(domain: NewStock) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_else(new_id),
            symbol: domain.symbol,
            name: domain.name,
            industry: domain.industry,
            grade: domain.grade.map(|g| g.as_str().to_string()),
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}
