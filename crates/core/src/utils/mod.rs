pub mod time_utils;

/// Generates a new record identifier.
///
/// UUID v7 is time-ordered, so identifiers created later sort after earlier ones.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
