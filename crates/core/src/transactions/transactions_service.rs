use log::{debug, error, info, warn};
use std::sync::Arc;

use super::transactions_model::{
    LedgerEntry, NewTransaction, TradeResult, Transaction, TransactionType,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::config::CoreConfig;
use crate::errors::{Error, Result};
use crate::positions::PositionServiceTrait;

/// Records trades and keeps positions in step with them.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    position_service: Arc<dyn PositionServiceTrait>,
    config: Arc<CoreConfig>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        position_service: Arc<dyn PositionServiceTrait>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            repository,
            position_service,
            config,
        }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<TradeResult> {
        new_transaction.validate()?;

        let portfolio_id = new_transaction.portfolio_id.clone();
        let stock_id = new_transaction.stock_id.clone();
        let quantity = new_transaction.quantity;
        let price = new_transaction.price;
        let transaction_type = new_transaction.transaction_type;

        // Anything the position would reject must fail before the ledger row exists.
        match transaction_type {
            TransactionType::Buy => self
                .position_service
                .check_buy(&portfolio_id, &stock_id, quantity, price)?,
            TransactionType::Sell => self
                .position_service
                .check_sell(&portfolio_id, &stock_id, quantity)?,
        }

        let transaction = self.repository.create(new_transaction)?;
        debug!(
            "Recorded {} {} x {} @ {} in portfolio {}",
            transaction.transaction_type, stock_id, quantity, price, portfolio_id
        );

        let applied = match transaction_type {
            TransactionType::Buy => self
                .position_service
                .apply_buy(&portfolio_id, &stock_id, quantity, price)
                .map(|position| (position, false)),
            TransactionType::Sell => self
                .position_service
                .apply_sell(&portfolio_id, &stock_id, quantity)
                .map(|position| {
                    let removed = position.is_closed() && self.config.remove_closed_positions;
                    (position, removed)
                }),
        };

        // The ledger row must not outlive a position update that failed.
        let (position, position_removed) = match applied {
            Ok(applied) => applied,
            Err(err) => {
                warn!(
                    "Position update for transaction {} failed, removing the row: {}",
                    transaction.id, err
                );
                if let Err(cleanup) = self.repository.delete(&transaction.id) {
                    error!(
                        "Could not remove transaction {} after a failed position update: {}",
                        transaction.id, cleanup
                    );
                }
                return Err(err);
            }
        };

        if position_removed {
            info!(
                "Transaction {} closed the position in {}",
                transaction.id, stock_id
            );
        }

        Ok(TradeResult {
            transaction,
            position,
            position_removed,
        })
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository
            .get_by_id(transaction_id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_id)))
    }

    fn list_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_by_portfolio(portfolio_id)
    }

    fn list_ledger_entries(&self, portfolio_id: &str) -> Result<Vec<LedgerEntry>> {
        self.repository.list_ledger_entries(portfolio_id)
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        if self.repository.delete(transaction_id)? == 0 {
            return Err(Error::NotFound(format!("Transaction {}", transaction_id)));
        }
        Ok(())
    }
}
