//! Money and Quantity value types.

mod money_model;
mod numeric;
mod quantity_model;

pub use money_model::Money;
pub use numeric::{parse_decimal, DecimalValue, IntoDecimal};
pub use quantity_model::Quantity;
