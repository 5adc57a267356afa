//! Shared numeric plumbing for the value types.
//!
//! [`IntoDecimal`] is the single entry point for turning "number-like" input
//! (machine floats, integers, decimal strings, native decimals) into a
//! `Decimal`. [`DecimalValue`] carries the arithmetic both `Money` and
//! `Quantity` share; each type decides how a raw result is normalized.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{DomainError, Error, Result, ValidationError};

/// Conversion of numeric-like input into a fixed-point `Decimal`.
///
/// Floats go through their shortest round-trip string form, so `1.005_f64`
/// becomes exactly `1.005` rather than its binary approximation.
pub trait IntoDecimal {
    fn into_decimal(self) -> Result<Decimal>;
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> Result<Decimal> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> Result<Decimal> {
        Ok(*self)
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(ValidationError::NotNumeric(self.to_string()).into());
        }
        parse_decimal(&self.to_string())
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(ValidationError::NotNumeric(self.to_string()).into());
        }
        parse_decimal(&self.to_string())
    }
}

macro_rules! impl_into_decimal_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_for_int!(i32, i64, u32, u64, usize);

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<Decimal> {
        parse_decimal(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<Decimal> {
        parse_decimal(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<Decimal> {
        parse_decimal(self)
    }
}

/// Parses a decimal string, accepting plain (`"12.50"`) and scientific (`"1.25e1"`) notation.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NotNumeric(input.to_string()).into());
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::Validation(ValidationError::NotNumeric(input.to_string())))
}

/// Arithmetic shared by the decimal-backed value types.
///
/// Every operation is pure and returns a new value built through
/// [`DecimalValue::from_arithmetic`], which applies the implementor's invariant
/// (currency rounding for `Money`, non-negativity for `Quantity`).
pub trait DecimalValue: Sized + Copy {
    /// The underlying fixed-point value.
    fn decimal(&self) -> Decimal;

    /// Builds a value from an arithmetic result.
    fn from_arithmetic(value: Decimal) -> Result<Self>;

    /// Adds a raw number.
    fn add_number<N: IntoDecimal>(&self, amount: N) -> Result<Self> {
        let amount = amount.into_decimal()?;
        let sum = self
            .decimal()
            .checked_add(amount)
            .ok_or_else(|| DomainError::Overflow(format!("{} + {}", self.decimal(), amount)))?;
        Self::from_arithmetic(sum)
    }

    /// Subtracts a raw number.
    fn sub_number<N: IntoDecimal>(&self, amount: N) -> Result<Self> {
        let amount = amount.into_decimal()?;
        let difference = self
            .decimal()
            .checked_sub(amount)
            .ok_or_else(|| DomainError::Overflow(format!("{} - {}", self.decimal(), amount)))?;
        Self::from_arithmetic(difference)
    }

    /// Multiplies by a scalar.
    fn multiply<N: IntoDecimal>(&self, factor: N) -> Result<Self> {
        let factor = factor.into_decimal()?;
        let product = self
            .decimal()
            .checked_mul(factor)
            .ok_or_else(|| DomainError::Overflow(format!("{} * {}", self.decimal(), factor)))?;
        Self::from_arithmetic(product)
    }

    /// Divides by a scalar. A zero divisor is rejected, never turned into infinity.
    fn divide<N: IntoDecimal>(&self, divisor: N) -> Result<Self> {
        let divisor = divisor.into_decimal()?;
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero(format!("{} / 0", self.decimal())).into());
        }
        let quotient = self
            .decimal()
            .checked_div(divisor)
            .ok_or_else(|| DomainError::Overflow(format!("{} / {}", self.decimal(), divisor)))?;
        Self::from_arithmetic(quotient)
    }
}
