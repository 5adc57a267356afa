//! Price target models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, FieldErrors, Result, ValidationError};
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetStatus {
    #[default]
    Active,
    Hit,
    Cancelled,
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Active => "ACTIVE",
            TargetStatus::Hit => "HIT",
            TargetStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(TargetStatus::Active),
            "HIT" => Ok(TargetStatus::Hit),
            "CANCELLED" => Ok(TargetStatus::Cancelled),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown target status '{}'", other),
            }
            .into()),
        }
    }
}

/// A price the user is watching for on one stock in one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    pub portfolio_id: String,
    pub stock_id: String,
    pub target_price: Money,
    pub stop_price: Option<Money>,
    pub reason: Option<String>,
    pub status: TargetStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub portfolio_id: String,
    pub stock_id: String,
    pub target_price: Money,
    pub stop_price: Option<Money>,
    pub reason: Option<String>,
}

impl NewTarget {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.portfolio_id.trim().is_empty() {
            errors.add("portfolioId", "Portfolio ID is required");
        }
        if self.stock_id.trim().is_empty() {
            errors.add("stockId", "Stock ID is required");
        }
        if !self.target_price.is_positive() {
            errors.add("targetPrice", "Target price must be greater than zero");
        }
        if self.stop_price.is_some_and(|stop| stop.is_negative()) {
            errors.add("stopPrice", "Stop price cannot be negative");
        }
        errors.into_result()
    }
}
