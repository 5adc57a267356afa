use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::constants::DATE_FORMAT;
use crate::errors::Result;

/// Parses an ISO `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

/// Formats a date the way it is stored and exchanged (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current instant as a naive UTC timestamp, the form used for audit columns.
pub fn now_naive_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}
