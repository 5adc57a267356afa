mod model;
mod repository;

pub use model::JournalEntryDB;
pub use repository::JournalRepository;
