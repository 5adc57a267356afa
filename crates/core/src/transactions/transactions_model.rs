//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, FieldErrors, Result, ValidationError};
use crate::money::{Money, Quantity};
use crate::positions::Position;
use crate::stocks::StockGrade;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
        }
    }

    /// +1 for buys, -1 for sells.
    pub fn sign(&self) -> i64 {
        match self {
            TransactionType::Buy => 1,
            TransactionType::Sell => -1,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            other => Err(ValidationError::InvalidFormat {
                field: "transactionType".to_string(),
                reason: format!("'{}' is not BUY or SELL", other),
            }
            .into()),
        }
    }
}

/// A recorded trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub portfolio_id: String,
    pub stock_id: String,
    pub transaction_type: TransactionType,
    pub quantity: Quantity,
    pub price: Money,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    /// Quantity × price.
    pub fn total_amount(&self) -> Result<Money> {
        self.price * self.quantity
    }
}

/// Input model for recording a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub portfolio_id: String,
    pub stock_id: String,
    pub transaction_type: TransactionType,
    pub quantity: Quantity,
    pub price: Money,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Validates the trade, reporting every offending field at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.portfolio_id.trim().is_empty() {
            errors.add("portfolioId", "Portfolio ID is required");
        }
        if self.stock_id.trim().is_empty() {
            errors.add("stockId", "Stock ID is required");
        }
        if self.quantity.is_zero() {
            errors.add("quantity", "Quantity must be greater than zero");
        }
        if self.price.is_negative() {
            errors.add("price", "Price cannot be negative");
        }
        if self.total_amount().is_err() {
            errors.add("quantity", "Quantity times price is too large");
        }
        errors.into_result()
    }

    pub fn total_amount(&self) -> Result<Money> {
        self.price * self.quantity
    }
}

/// One ledger row: a transaction joined with the stock it trades.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub stock_id: String,
    pub symbol: String,
    pub name: String,
    pub grade: Option<StockGrade>,
    pub transaction_type: TransactionType,
    pub quantity: Quantity,
    pub price: Money,
}

/// Outcome of recording a trade: the stored row and the position after it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    pub transaction: Transaction,
    pub position: Position,
    /// Set when the trade closed the position and the row was deleted.
    pub position_removed: bool,
}
