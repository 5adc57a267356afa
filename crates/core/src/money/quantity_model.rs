//! Share count value type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::numeric::{DecimalValue, IntoDecimal};
use crate::errors::{DomainError, Error, Result, ValidationError};

/// An immutable, never-negative share count. Fractional shares are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// Builds a Quantity from any numeric-like input.
    ///
    /// Negative input is rejected with `ValidationError::NegativeValue`.
    pub fn new<N: IntoDecimal>(value: N) -> Result<Self> {
        Self::from_decimal(value.into_decimal()?)
    }

    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeValue {
                field: "Quantity".to_string(),
                value,
            }
            .into());
        }
        Ok(Quantity(strip_negative_zero(value)))
    }

    pub fn zero() -> Self {
        Quantity(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(&self, other: Quantity) -> Result<Quantity> {
        self.0
            .checked_add(other.0)
            .map(Quantity)
            .ok_or_else(|| DomainError::Overflow(format!("{} + {}", self.0, other.0)).into())
    }

    /// Subtracts another quantity.
    ///
    /// Fails with `DomainError::InsufficientQuantity` if the result would be
    /// negative; nothing is partially applied.
    pub fn checked_sub(&self, other: Quantity) -> Result<Quantity> {
        if other.0 > self.0 {
            return Err(DomainError::InsufficientQuantity {
                held: self.0,
                requested: other.0,
            }
            .into());
        }
        Ok(Quantity(strip_negative_zero(self.0 - other.0)))
    }
}

fn strip_negative_zero(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value
    }
}

impl DecimalValue for Quantity {
    fn decimal(&self) -> Decimal {
        self.0
    }

    fn from_arithmetic(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeQuantity(value).into());
        }
        Ok(Quantity(strip_negative_zero(value)))
    }
}

impl Add for Quantity {
    type Output = Result<Quantity>;

    fn add(self, rhs: Quantity) -> Result<Quantity> {
        self.checked_add(rhs)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Quantity::from_decimal(value)
    }
}

impl IntoDecimal for Quantity {
    fn into_decimal(self) -> Result<Decimal> {
        Ok(self.0)
    }
}
