/// Fractional digits kept by `Money`.
pub const MONEY_SCALE: u32 = 2;

/// Date format used for storage and for dates exchanged with the presentation layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default number of balance snapshots returned by history queries.
pub const DEFAULT_BALANCE_HISTORY_LIMIT: i64 = 30;

/// Default number of journal entries returned by recent-entry queries.
pub const DEFAULT_JOURNAL_RECENT_LIMIT: i64 = 20;

/// Default maximum ticker symbol length.
pub const DEFAULT_MAX_SYMBOL_LENGTH: usize = 10;
