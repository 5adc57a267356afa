//! Holdings module - the per-stock projection computed from the trade ledger.

mod holdings_calculator;
mod holdings_model;
mod holdings_service;
mod holdings_traits;


pub use holdings_calculator::aggregate_holdings;
pub use holdings_model::Holding;
pub use holdings_service::HoldingsService;
pub use holdings_traits::HoldingsServiceTrait;
