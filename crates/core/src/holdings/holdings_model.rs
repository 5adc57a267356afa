use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{DomainError, Result};
use crate::money::{Money, Quantity};
use crate::stocks::StockGrade;

/// Net holding of one stock, derived from buys and sells. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub stock_id: String,
    pub symbol: String,
    pub name: String,
    pub grade: Option<StockGrade>,
    /// Bought minus sold. Always strictly positive.
    pub shares: Quantity,
    /// Signed sum of quantity × price over the ledger.
    pub cost_basis: Money,
}

impl Holding {
    /// Cost basis per held share.
    pub fn average_cost(&self) -> Result<Money> {
        let shares: Decimal = self.shares.value();
        if shares.is_zero() {
            return Err(DomainError::DivisionByZero(format!("no shares of {}", self.symbol)).into());
        }
        let per_share = self
            .cost_basis
            .amount()
            .checked_div(shares)
            .ok_or_else(|| DomainError::Overflow(format!("average cost of {}", self.symbol)))?;
        Ok(Money::from_decimal(per_share))
    }
}
