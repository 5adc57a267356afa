//! Database model for journal entries.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::parse_enum_column;
use stockbook_core::journal::{JournalEntry, JournalEntryView, NewJournalEntry};
use stockbook_core::utils::new_id;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::journal_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JournalEntryDB {
    pub id: String,
    pub entry_date: NaiveDate,
    pub entry_type: String,
    pub content: String,
    pub stock_id: Option<String>,
    pub portfolio_id: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An entry row with the names picked up by the left joins.
pub type JournalViewRowDB = (
    JournalEntryDB,
    Option<String>,
    Option<String>,
    Option<String>,
);

impl TryFrom<JournalEntryDB> for JournalEntry {
    type Error = StorageError;

    fn try_from(db: JournalEntryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            entry_type: parse_enum_column(&db.entry_type, "journal_entries.entry_type")?,
            id: db.id,
            entry_date: db.entry_date,
            content: db.content,
            stock_id: db.stock_id,
            portfolio_id: db.portfolio_id,
            transaction_id: db.transaction_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

pub fn view_from_row(row: JournalViewRowDB) -> Result<JournalEntryView, StorageError> {
    let (entry, stock_symbol, stock_name, portfolio_name) = row;
    Ok(JournalEntryView {
        entry: JournalEntry::try_from(entry)?,
        stock_symbol,
        stock_name,
        portfolio_name,
    })
}

impl From<NewJournalEntry> for JournalEntryDB {
    fn from(domain: NewJournalEntry) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_else(new_id),
            entry_date: domain.entry_date,
            entry_type: domain.entry_type.as_str().to_string(),
            content: domain.content,
            stock_id: domain.stock_id,
            portfolio_id: domain.portfolio_id,
            transaction_id: domain.transaction_id,
            created_at: now,
            updated_at: now,
        }
    }
}
