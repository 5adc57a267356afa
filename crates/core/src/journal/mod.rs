//! Journal module - free-form trading notes.

mod journal_model;
mod journal_service;
mod journal_traits;


pub use journal_model::{JournalEntry, JournalEntryType, JournalEntryView, NewJournalEntry};
pub use journal_service::JournalService;
pub use journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
