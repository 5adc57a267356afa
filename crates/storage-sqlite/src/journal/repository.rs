use diesel::prelude::*;
use std::sync::Arc;

use super::model::{view_from_row, JournalEntryDB, JournalViewRowDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{journal_entries, portfolios, stocks};
use stockbook_core::errors::{Error, Result};
use stockbook_core::journal::{
    JournalEntry, JournalEntryView, JournalRepositoryTrait, NewJournalEntry,
};

pub struct JournalRepository {
    pool: Arc<DbPool>,
}

impl JournalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl JournalRepositoryTrait for JournalRepository {
    fn create(&self, new_entry: NewJournalEntry) -> Result<JournalEntry> {
        let mut conn = get_connection(&self.pool)?;
        let entry_db: JournalEntryDB = new_entry.into();

        diesel::insert_into(journal_entries::table)
            .values(&entry_db)
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(JournalEntry::try_from(entry_db)?)
    }

    fn get_by_id(&self, entry_id: &str) -> Result<Option<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let found = journal_entries::table
            .find(entry_id)
            .select(JournalEntryDB::as_select())
            .first::<JournalEntryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(JournalEntry::try_from).transpose()?)
    }

    fn get_recent_entries(&self, limit: i64) -> Result<Vec<JournalEntryView>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = journal_entries::table
            .left_join(stocks::table)
            .left_join(portfolios::table)
            .select((
                JournalEntryDB::as_select(),
                stocks::symbol.nullable(),
                stocks::name.nullable(),
                portfolios::name.nullable(),
            ))
            .order((
                journal_entries::entry_date.desc(),
                journal_entries::created_at.desc(),
                journal_entries::id.desc(),
            ))
            .limit(limit)
            .load::<JournalViewRowDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| view_from_row(row).map_err(Error::from))
            .collect()
    }

    fn delete(&self, entry_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(journal_entries::table.find(entry_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?)
    }
}
