//! Runtime settings for the core services.
//!
//! `CoreConfig` is built once by the host application and handed to the
//! services that need it. It is never mutated after construction.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BALANCE_HISTORY_LIMIT, DEFAULT_JOURNAL_RECENT_LIMIT, DEFAULT_MAX_SYMBOL_LENGTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    /// Delete the position row once a sell brings its quantity to zero.
    pub remove_closed_positions: bool,
    /// Row cap for balance history when the caller gives none.
    pub balance_history_limit: i64,
    /// Row cap for the recent journal view when the caller gives none.
    pub journal_recent_limit: i64,
    pub max_symbol_length: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            remove_closed_positions: false,
            balance_history_limit: DEFAULT_BALANCE_HISTORY_LIMIT,
            journal_recent_limit: DEFAULT_JOURNAL_RECENT_LIMIT,
            max_symbol_length: DEFAULT_MAX_SYMBOL_LENGTH,
        }
    }
}

impl CoreConfig {
    pub fn with_remove_closed_positions(mut self, remove: bool) -> Self {
        self.remove_closed_positions = remove;
        self
    }

    pub fn with_balance_history_limit(mut self, limit: i64) -> Self {
        self.balance_history_limit = limit;
        self
    }

    pub fn with_journal_recent_limit(mut self, limit: i64) -> Self {
        self.journal_recent_limit = limit;
        self
    }

    /// Resolves an optional caller-supplied limit, falling back to `default`.
    /// Non-positive limits are treated as absent.
    pub fn resolve_limit(requested: Option<i64>, default: i64) -> i64 {
        match requested {
            Some(limit) if limit > 0 => limit,
            _ => default,
        }
    }
}
