//! Transaction repository and service traits.

use super::transactions_model::{LedgerEntry, NewTransaction, TradeResult, Transaction};
use crate::errors::Result;

pub trait TransactionRepositoryTrait: Send + Sync {
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    fn get_by_id(&self, transaction_id: &str) -> Result<Option<Transaction>>;

    /// Newest trade date first.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;

    /// Every trade in a portfolio joined with its stock's symbol, name and grade.
    fn list_ledger_entries(&self, portfolio_id: &str) -> Result<Vec<LedgerEntry>>;

    fn delete(&self, transaction_id: &str) -> Result<usize>;
}

pub trait TransactionServiceTrait: Send + Sync {
    /// Stores a trade and applies it to the matching position.
    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<TradeResult>;

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    fn list_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;

    fn list_ledger_entries(&self, portfolio_id: &str) -> Result<Vec<LedgerEntry>>;

    /// Removes the ledger row only; positions are not rewound.
    fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
}
