//! Ledger to holdings aggregation.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::holdings_model::Holding;
use crate::errors::{DomainError, Result};
use crate::money::{Money, Quantity};
use crate::transactions::LedgerEntry;

struct Running<'a> {
    first: &'a LedgerEntry,
    shares: Decimal,
    cost: Decimal,
}

/// Folds ledger rows into one holding per stock.
///
/// Buys count +1 and sells -1 toward both the share count and the cost basis
/// (quantity × price, summed exactly and rounded once). Stocks whose net
/// share count is zero or negative are left out. The result is sorted by
/// symbol.
pub fn aggregate_holdings(entries: &[LedgerEntry]) -> Result<Vec<Holding>> {
    let mut groups: BTreeMap<&str, Running<'_>> = BTreeMap::new();

    for entry in entries {
        let sign = Decimal::from(entry.transaction_type.sign());
        let quantity = entry.quantity.value();
        let amount = quantity
            .checked_mul(entry.price.amount())
            .ok_or_else(|| DomainError::Overflow(format!("cost of {}", entry.symbol)))?;

        let running = groups.entry(entry.stock_id.as_str()).or_insert(Running {
            first: entry,
            shares: Decimal::ZERO,
            cost: Decimal::ZERO,
        });
        running.shares = running
            .shares
            .checked_add(sign * quantity)
            .ok_or_else(|| DomainError::Overflow(format!("shares of {}", entry.symbol)))?;
        running.cost = running
            .cost
            .checked_add(sign * amount)
            .ok_or_else(|| DomainError::Overflow(format!("cost of {}", entry.symbol)))?;
    }

    let mut holdings: Vec<Holding> = groups
        .into_values()
        .filter(|running| running.shares > Decimal::ZERO)
        .map(|running| {
            Ok(Holding {
                stock_id: running.first.stock_id.clone(),
                symbol: running.first.symbol.clone(),
                name: running.first.name.clone(),
                grade: running.first.grade,
                shares: Quantity::from_decimal(running.shares)?,
                cost_basis: Money::from_decimal(running.cost),
            })
        })
        .collect::<Result<_>>()?;

    holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    Ok(holdings)
}
