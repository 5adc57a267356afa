//! Stock domain models.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

lazy_static! {
    /// Ticker symbols: an upper-case letter followed by letters, digits, dots or dashes.
    static ref SYMBOL_REGEX: Regex =
        Regex::new(r"^[A-Z][A-Z0-9.\-]*$").expect("Invalid regex pattern");
}

/// Conviction grade a user assigns to a stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockGrade {
    A,
    B,
    C,
}

impl StockGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockGrade::A => "A",
            StockGrade::B => "B",
            StockGrade::C => "C",
        }
    }
}

impl fmt::Display for StockGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockGrade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(StockGrade::A),
            "B" => Ok(StockGrade::B),
            "C" => Ok(StockGrade::C),
            other => Err(ValidationError::InvalidFormat {
                field: "grade".to_string(),
                reason: format!("'{}' is not one of A, B, C", other),
            }
            .into()),
        }
    }
}

/// Domain model representing a tracked stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub grade: Option<StockGrade>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub grade: Option<StockGrade>,
    pub notes: Option<String>,
}

impl NewStock {
    /// Validates the new stock data.
    pub fn validate(&self, max_symbol_length: usize) -> Result<()> {
        validate_symbol(&self.symbol, max_symbol_length)?;
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("Stock name".to_string()).into());
        }
        Ok(())
    }
}

/// Input model for updating an existing stock. The symbol is fixed once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub grade: Option<StockGrade>,
    pub notes: Option<String>,
}

impl StockUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::Required("Stock ID".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("Stock name".to_string()).into());
        }
        Ok(())
    }
}

/// Checks a ticker symbol against the accepted pattern and length.
pub fn validate_symbol(symbol: &str, max_length: usize) -> Result<()> {
    if symbol.is_empty() {
        return Err(ValidationError::EmptyField("Symbol".to_string()).into());
    }
    if symbol.len() > max_length {
        return Err(ValidationError::InvalidFormat {
            field: "symbol".to_string(),
            reason: format!("longer than {} characters", max_length),
        }
        .into());
    }
    if !SYMBOL_REGEX.is_match(symbol) {
        return Err(ValidationError::InvalidFormat {
            field: "symbol".to_string(),
            reason: format!("'{}' does not look like a ticker", symbol),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_symbol_accepts_tickers() {
        for symbol in ["AAPL", "BRK.B", "RDS-A", "X", "T2"] {
            assert!(validate_symbol(symbol, 10).is_ok(), "{}", symbol);
        }
    }

    #[test]
    fn test_validate_symbol_rejects_bad_input() {
        assert!(validate_symbol("", 10).is_err());
        assert!(validate_symbol("aapl", 10).is_err());
        assert!(validate_symbol("1ABC", 10).is_err());
        assert!(validate_symbol("AB CD", 10).is_err());
        assert!(validate_symbol("ABCDEFGHIJK", 10).is_err());
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!("b".parse::<StockGrade>().unwrap(), StockGrade::B);
        assert!("D".parse::<StockGrade>().is_err());
        assert_eq!(StockGrade::C.to_string(), "C");
    }

    #[test]
    fn test_new_stock_requires_name() {
        let stock = NewStock {
            id: None,
            symbol: "MSFT".to_string(),
            name: "  ".to_string(),
            industry: None,
            grade: None,
            notes: None,
        };
        let err = stock.validate(10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Stock name cannot be empty"
        );
    }
}
