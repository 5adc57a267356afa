//! Journal entry models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalEntryType {
    #[default]
    Note,
    Trade,
    Observation,
    Lesson,
}

impl JournalEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalEntryType::Note => "NOTE",
            JournalEntryType::Trade => "TRADE",
            JournalEntryType::Observation => "OBSERVATION",
            JournalEntryType::Lesson => "LESSON",
        }
    }
}

impl fmt::Display for JournalEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JournalEntryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOTE" => Ok(JournalEntryType::Note),
            "TRADE" => Ok(JournalEntryType::Trade),
            "OBSERVATION" => Ok(JournalEntryType::Observation),
            "LESSON" => Ok(JournalEntryType::Lesson),
            other => Err(ValidationError::InvalidFormat {
                field: "entryType".to_string(),
                reason: format!("unknown entry type '{}'", other),
            }
            .into()),
        }
    }
}

/// A dated note. Any combination of the stock, portfolio and transaction
/// references may be set, including none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub entry_date: NaiveDate,
    pub entry_type: JournalEntryType,
    pub content: String,
    pub stock_id: Option<String>,
    pub portfolio_id: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub entry_type: JournalEntryType,
    pub content: String,
    pub stock_id: Option<String>,
    pub portfolio_id: Option<String>,
    pub transaction_id: Option<String>,
}

impl NewJournalEntry {
    /// A plain note with no references.
    pub fn note(entry_date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            id: None,
            entry_date,
            entry_type: JournalEntryType::Note,
            content: content.into(),
            stock_id: None,
            portfolio_id: None,
            transaction_id: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyField("Journal content".to_string()).into());
        }
        Ok(())
    }

    /// Trims the content and turns blank references into `None`.
    pub fn normalized(mut self) -> Self {
        self.content = self.content.trim().to_string();
        self.stock_id = non_blank(self.stock_id);
        self.portfolio_id = non_blank(self.portfolio_id);
        self.transaction_id = non_blank(self.transaction_id);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Journal entry with display names from its optional stock and portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryView {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub stock_symbol: Option<String>,
    pub stock_name: Option<String>,
    pub portfolio_name: Option<String>,
}
