//! Position aggregate and its weighted-average cost accounting.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{DomainError, Result, ValidationError};
use crate::money::{Money, Quantity};
use crate::utils::new_id;

/// Shares of one stock held in one portfolio.
///
/// The portfolio and stock references are fixed at construction. Quantity
/// never drops below zero, and the average cost only moves when shares are
/// added: selling keeps the cost basis of the remaining shares (average-cost
/// method). A position whose quantity reaches zero is still a valid value;
/// removing it is left to the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    id: String,
    portfolio_id: String,
    stock_id: String,
    quantity: Quantity,
    average_cost: Money,
    last_transaction_date: Option<DateTime<Utc>>,
}

impl Position {
    /// Starts building a position. All of portfolio id, stock id, quantity
    /// and average cost must be supplied before `build` succeeds.
    pub fn builder() -> PositionBuilder {
        PositionBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn portfolio_id(&self) -> &str {
        &self.portfolio_id
    }

    pub fn stock_id(&self) -> &str {
        &self.stock_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn average_cost(&self) -> Money {
        self.average_cost
    }

    pub fn last_transaction_date(&self) -> Option<DateTime<Utc>> {
        self.last_transaction_date
    }

    pub fn is_closed(&self) -> bool {
        self.quantity.is_zero()
    }

    /// quantity × average cost, rounded once.
    ///
    /// The valuation methods below fail with `DomainError::Overflow` when a
    /// product or difference leaves the decimal range.
    pub fn calculate_total_cost(&self) -> Result<Money> {
        self.average_cost * self.quantity
    }

    /// quantity × current price, rounded once.
    pub fn calculate_current_value(&self, current_price: Money) -> Result<Money> {
        current_price * self.quantity
    }

    /// Signed difference between current value and total cost.
    pub fn calculate_gain_loss(&self, current_price: Money) -> Result<Money> {
        self.calculate_current_value(current_price)? - self.calculate_total_cost()?
    }

    /// Gain or loss as a percentage of total cost.
    ///
    /// Fails with `DomainError::DivisionByZero` when the total cost is zero.
    pub fn calculate_gain_loss_percentage(&self, current_price: Money) -> Result<Decimal> {
        let total_cost = self.calculate_total_cost()?;
        if total_cost.is_zero() {
            return Err(DomainError::DivisionByZero(format!(
                "total cost of position {} is zero",
                self.id
            ))
            .into());
        }
        let gain_loss = self.calculate_gain_loss(current_price)?;
        let ratio = gain_loss
            .amount()
            .checked_div(total_cost.amount())
            .ok_or_else(|| DomainError::Overflow(format!("{} / {}", gain_loss, total_cost)))?;
        ratio
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| DomainError::Overflow(format!("{} %", ratio)).into())
    }

    /// Breakeven is not profitable.
    pub fn is_profitable(&self, current_price: Money) -> Result<bool> {
        Ok(self.calculate_current_value(current_price)? > self.calculate_total_cost()?)
    }

    /// Adds shares bought at `price`, moving the average cost to the weighted
    /// average of the old and new lots.
    ///
    /// ```text
    /// new_avg = (q_old × avg_old + q_added × price) / (q_old + q_added)
    /// ```
    ///
    /// The whole expression is evaluated in decimal and rounded only when the
    /// result becomes `Money`. Adding zero shares changes nothing.
    pub fn add_shares(&mut self, quantity: Quantity, price: Money) -> Result<()> {
        if quantity.is_zero() {
            return Ok(());
        }

        let held = self.quantity.value();
        let added = quantity.value();

        let existing_cost = held
            .checked_mul(self.average_cost.amount())
            .ok_or_else(|| DomainError::Overflow("existing cost basis".to_string()))?;
        let added_cost = added
            .checked_mul(price.amount())
            .ok_or_else(|| DomainError::Overflow("added cost basis".to_string()))?;
        let total_cost = existing_cost
            .checked_add(added_cost)
            .ok_or_else(|| DomainError::Overflow("total cost basis".to_string()))?;
        let new_quantity = (self.quantity + quantity)?;
        let new_average = total_cost
            .checked_div(new_quantity.value())
            .ok_or_else(|| DomainError::Overflow("average cost".to_string()))?;

        debug!(
            "Position {}: adding {} @ {} ({} -> {} shares)",
            self.id, quantity, price, self.quantity, new_quantity
        );

        self.average_cost = Money::from_decimal(new_average);
        self.quantity = new_quantity;
        self.last_transaction_date = Some(Utc::now());
        Ok(())
    }

    /// Removes sold shares. The average cost is left as it is.
    ///
    /// Selling more than is held fails with `DomainError::InsufficientQuantity`
    /// and leaves the position untouched. Removing zero shares changes nothing.
    pub fn remove_shares(&mut self, quantity: Quantity) -> Result<()> {
        if quantity.is_zero() {
            return Ok(());
        }

        let remaining = self.quantity.checked_sub(quantity)?;
        debug!(
            "Position {}: removing {} ({} -> {} shares)",
            self.id, quantity, self.quantity, remaining
        );

        self.quantity = remaining;
        self.last_transaction_date = Some(Utc::now());
        Ok(())
    }
}

/// Builder enforcing the four required fields of a [`Position`].
#[derive(Debug, Clone, Default)]
pub struct PositionBuilder {
    id: Option<String>,
    portfolio_id: Option<String>,
    stock_id: Option<String>,
    quantity: Option<Quantity>,
    average_cost: Option<Money>,
    last_transaction_date: Option<DateTime<Utc>>,
}

impl PositionBuilder {
    /// Uses an existing identifier, e.g. when loading from storage.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn portfolio_id(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = Some(portfolio_id.into());
        self
    }

    pub fn stock_id(mut self, stock_id: impl Into<String>) -> Self {
        self.stock_id = Some(stock_id.into());
        self
    }

    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn average_cost(mut self, average_cost: Money) -> Self {
        self.average_cost = Some(average_cost);
        self
    }

    pub fn last_transaction_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_transaction_date = Some(date);
        self
    }

    /// Builds the Position.
    ///
    /// Fails with `ValidationError::Required` naming the first missing field,
    /// or `ValidationError::EmptyField` when an id is blank.
    pub fn build(self) -> Result<Position> {
        let portfolio_id = required_id(self.portfolio_id, "Portfolio ID")?;
        let stock_id = required_id(self.stock_id, "Stock ID")?;
        let quantity = self
            .quantity
            .ok_or_else(|| ValidationError::Required("Quantity".to_string()))?;
        let average_cost = self
            .average_cost
            .ok_or_else(|| ValidationError::Required("Average cost".to_string()))?;

        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => new_id(),
        };

        Ok(Position {
            id,
            portfolio_id,
            stock_id,
            quantity,
            average_cost,
            last_transaction_date: self.last_transaction_date,
        })
    }
}

fn required_id(value: Option<String>, label: &str) -> Result<String> {
    let value = value.ok_or_else(|| ValidationError::Required(label.to_string()))?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(label.to_string()).into());
    }
    Ok(value)
}
