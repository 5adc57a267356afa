use log::debug;
use std::sync::Arc;

use super::holdings_calculator::aggregate_holdings;
use super::holdings_model::Holding;
use super::holdings_traits::HoldingsServiceTrait;
use crate::errors::Result;
use crate::transactions::TransactionRepositoryTrait;

pub struct HoldingsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
        let entries = self
            .transaction_repository
            .list_ledger_entries(portfolio_id)?;
        let holdings = aggregate_holdings(&entries)?;
        debug!(
            "Portfolio {}: {} ledger rows -> {} holdings",
            portfolio_id,
            entries.len(),
            holdings.len()
        );
        Ok(holdings)
    }
}
