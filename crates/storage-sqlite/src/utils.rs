//! Column conversion helpers shared by the repositories.
//!
//! Money and quantity columns are stored as canonical decimal TEXT so no value
//! ever passes through a float on its way in or out of SQLite.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use stockbook_core::{Money, Quantity};

/// Parses a decimal TEXT column.
pub fn parse_decimal_column(value: &str, column: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value.trim()).map_err(|e| {
        log::error!("Failed to parse {} '{}' as decimal: {}", column, value, e);
        StorageError::CorruptColumn {
            column: column.to_string(),
            reason: e.to_string(),
        }
    })
}

pub fn parse_money_column(value: &str, column: &str) -> Result<Money, StorageError> {
    parse_decimal_column(value, column).map(Money::from_decimal)
}

pub fn parse_quantity_column(value: &str, column: &str) -> Result<Quantity, StorageError> {
    let decimal = parse_decimal_column(value, column)?;
    Quantity::from_decimal(decimal).map_err(|e| StorageError::CorruptColumn {
        column: column.to_string(),
        reason: e.to_string(),
    })
}

/// Parses an enum stored as TEXT through its `FromStr` impl.
pub fn parse_enum_column<T>(value: &str, column: &str) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| StorageError::CorruptColumn {
        column: column.to_string(),
        reason: e.to_string(),
    })
}

/// Canonical TEXT form of a decimal.
pub fn decimal_to_column(value: Decimal) -> String {
    value.to_string()
}
