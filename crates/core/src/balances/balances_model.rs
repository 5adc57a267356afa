//! Portfolio balance snapshot models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, Result};
use crate::money::Money;

/// End-of-day balance of a portfolio with that day's cash flows.
///
/// At most one snapshot exists per (portfolio, date). `index_change` is the
/// benchmark's percentage move for the day and is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBalance {
    pub id: String,
    pub portfolio_id: String,
    pub balance_date: NaiveDate,
    pub final_balance: Money,
    pub withdrawals: Money,
    pub deposits: Money,
    pub index_change: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PortfolioBalance {
    /// Deposits minus withdrawals.
    pub fn net_flow(&self) -> Money {
        self.deposits - self.withdrawals
    }
}

/// Input for recording a snapshot. Re-recording the same date replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioBalance {
    pub portfolio_id: String,
    pub balance_date: NaiveDate,
    pub final_balance: Money,
    #[serde(default)]
    pub withdrawals: Money,
    #[serde(default)]
    pub deposits: Money,
    #[serde(default)]
    pub index_change: Option<Decimal>,
}

impl NewPortfolioBalance {
    /// Snapshot with no cash flows and no benchmark figure.
    pub fn new(portfolio_id: impl Into<String>, balance_date: NaiveDate, final_balance: Money) -> Self {
        Self {
            portfolio_id: portfolio_id.into(),
            balance_date,
            final_balance,
            withdrawals: Money::zero(),
            deposits: Money::zero(),
            index_change: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if self.portfolio_id.trim().is_empty() {
            errors.add("portfolioId", "Portfolio ID is required");
        }
        if self.withdrawals.is_negative() {
            errors.add("withdrawals", "Withdrawals cannot be negative");
        }
        if self.deposits.is_negative() {
            errors.add("deposits", "Deposits cannot be negative");
        }
        errors.into_result()
    }
}
