use super::journal_model::{JournalEntry, JournalEntryView, NewJournalEntry};
use crate::errors::Result;

pub trait JournalRepositoryTrait: Send + Sync {
    fn create(&self, new_entry: NewJournalEntry) -> Result<JournalEntry>;

    fn get_by_id(&self, entry_id: &str) -> Result<Option<JournalEntry>>;

    /// Newest entry date first; same-day entries newest-created first.
    fn get_recent_entries(&self, limit: i64) -> Result<Vec<JournalEntryView>>;

    fn delete(&self, entry_id: &str) -> Result<usize>;
}

pub trait JournalServiceTrait: Send + Sync {
    fn create_entry(&self, new_entry: NewJournalEntry) -> Result<JournalEntry>;

    fn get_entry(&self, entry_id: &str) -> Result<JournalEntry>;

    fn get_recent_entries(&self, limit: Option<i64>) -> Result<Vec<JournalEntryView>>;

    fn delete_entry(&self, entry_id: &str) -> Result<()>;
}
