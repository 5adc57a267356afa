//! Stocks module - domain models, services, and traits.

mod stocks_model;
mod stocks_service;
mod stocks_traits;

#[cfg(test)]
mod stocks_service_tests;

pub use stocks_model::{validate_symbol, NewStock, Stock, StockGrade, StockUpdate};
pub use stocks_service::StockService;
pub use stocks_traits::{StockRepositoryTrait, StockServiceTrait};
