//! Currency amount value type.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::numeric::{DecimalValue, IntoDecimal};
use super::quantity_model::Quantity;
use crate::constants::MONEY_SCALE;
use crate::errors::{DomainError, Error, Result};

/// An immutable amount of currency.
///
/// The amount is always held at exactly two fractional digits, rounded
/// half away from zero at construction (`1.005` becomes `1.01`). Negative
/// amounts are allowed so losses and deficits can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Money(Decimal);

/// Rounds to currency precision and pins the scale to two digits.
fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl Money {
    /// Builds a Money value from any numeric-like input.
    ///
    /// Fails with `ValidationError::NotNumeric` if the input is not a number.
    pub fn new<N: IntoDecimal>(amount: N) -> Result<Self> {
        Ok(Self::from_decimal(amount.into_decimal()?))
    }

    /// Builds a Money value from a decimal, rounding to currency precision.
    pub fn from_decimal(amount: Decimal) -> Self {
        Money(round_currency(amount))
    }

    pub fn zero() -> Self {
        Self::from_decimal(Decimal::ZERO)
    }

    /// The rounded amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(&self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Money::from_decimal)
            .ok_or_else(|| DomainError::Overflow(format!("{} + {}", self.0, other.0)).into())
    }

    pub fn checked_sub(&self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money::from_decimal)
            .ok_or_else(|| DomainError::Overflow(format!("{} - {}", self.0, other.0)).into())
    }

    pub fn checked_mul(&self, factor: Decimal) -> Result<Money> {
        self.0
            .checked_mul(factor)
            .map(Money::from_decimal)
            .ok_or_else(|| DomainError::Overflow(format!("{} * {}", self.0, factor)).into())
    }

    /// Adds up amounts, failing on the first sum that overflows.
    pub fn try_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Result<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }
}

impl DecimalValue for Money {
    fn decimal(&self) -> Decimal {
        self.0
    }

    fn from_arithmetic(value: Decimal) -> Result<Self> {
        Ok(Self::from_decimal(value))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

// Operators between value types return `Result`: a sum or product that
// leaves the decimal range is `DomainError::Overflow`, never a panic.

impl Add for Money {
    type Output = Result<Money>;

    fn add(self, rhs: Money) -> Result<Money> {
        self.checked_add(rhs)
    }
}

impl Sub for Money {
    type Output = Result<Money>;

    fn sub(self, rhs: Money) -> Result<Money> {
        self.checked_sub(rhs)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

/// Price times share count. The product is computed exactly and rounded once.
impl Mul<Quantity> for Money {
    type Output = Result<Money>;

    fn mul(self, rhs: Quantity) -> Result<Money> {
        self.checked_mul(rhs.value())
    }
}

impl Mul<Decimal> for Money {
    type Output = Result<Money>;

    fn mul(self, rhs: Decimal) -> Result<Money> {
        self.checked_mul(rhs)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Ok(Money::from_decimal(value))
    }
}

impl IntoDecimal for Money {
    fn into_decimal(self) -> Result<Decimal> {
        Ok(self.0)
    }
}
