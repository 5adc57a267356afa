//! Transactions module - the buy/sell ledger and trade recording.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_model::{
    LedgerEntry, NewTransaction, TradeResult, Transaction, TransactionType,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
