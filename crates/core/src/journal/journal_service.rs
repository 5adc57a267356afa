use log::debug;
use std::sync::Arc;

use super::journal_model::{JournalEntry, JournalEntryView, NewJournalEntry};
use super::journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
use crate::config::CoreConfig;
use crate::errors::{Error, Result};

pub struct JournalService {
    repository: Arc<dyn JournalRepositoryTrait>,
    config: Arc<CoreConfig>,
}

impl JournalService {
    pub fn new(repository: Arc<dyn JournalRepositoryTrait>, config: Arc<CoreConfig>) -> Self {
        Self { repository, config }
    }
}

impl JournalServiceTrait for JournalService {
    fn create_entry(&self, new_entry: NewJournalEntry) -> Result<JournalEntry> {
        let new_entry = new_entry.normalized();
        new_entry.validate()?;
        debug!(
            "Journal {} entry for {}",
            new_entry.entry_type, new_entry.entry_date
        );
        self.repository.create(new_entry)
    }

    fn get_entry(&self, entry_id: &str) -> Result<JournalEntry> {
        self.repository
            .get_by_id(entry_id)?
            .ok_or_else(|| Error::NotFound(format!("Journal entry {}", entry_id)))
    }

    fn get_recent_entries(&self, limit: Option<i64>) -> Result<Vec<JournalEntryView>> {
        let limit = CoreConfig::resolve_limit(limit, self.config.journal_recent_limit);
        self.repository.get_recent_entries(limit)
    }

    fn delete_entry(&self, entry_id: &str) -> Result<()> {
        if self.repository.delete(entry_id)? == 0 {
            return Err(Error::NotFound(format!("Journal entry {}", entry_id)));
        }
        Ok(())
    }
}
