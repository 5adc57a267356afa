use super::holdings_model::Holding;
use crate::errors::Result;

pub trait HoldingsServiceTrait: Send + Sync {
    /// Current holdings of a portfolio, recomputed from its full ledger.
    fn get_holdings(&self, portfolio_id: &str) -> Result<Vec<Holding>>;
}
