use std::sync::Arc;

use crate::config::Config;
use stockbook_core::{
    balances::{BalanceService, BalanceServiceTrait},
    holdings::{HoldingsService, HoldingsServiceTrait},
    journal::{JournalService, JournalServiceTrait},
    portfolios::{PortfolioService, PortfolioServiceTrait},
    positions::{PositionService, PositionServiceTrait},
    stocks::{StockService, StockServiceTrait},
    targets::{TargetService, TargetServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
};
use stockbook_storage_sqlite::{
    db, BalanceRepository, JournalRepository, PortfolioRepository, PositionRepository,
    StockRepository, TargetRepository, TransactionRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub stock_service: Arc<dyn StockServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub position_service: Arc<dyn PositionServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub balance_service: Arc<dyn BalanceServiceTrait>,
    pub target_service: Arc<dyn TargetServiceTrait>,
    pub journal_service: Arc<dyn JournalServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let core_config = Arc::new(config.core.clone());

    let stock_repo = Arc::new(StockRepository::new(pool.clone()));
    let portfolio_repo = Arc::new(PortfolioRepository::new(pool.clone()));
    let position_repo = Arc::new(PositionRepository::new(pool.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone()));
    let balance_repo = Arc::new(BalanceRepository::new(pool.clone()));
    let target_repo = Arc::new(TargetRepository::new(pool.clone()));
    let journal_repo = Arc::new(JournalRepository::new(pool));

    let position_service: Arc<dyn PositionServiceTrait> =
        Arc::new(PositionService::new(position_repo, core_config.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repo.clone(),
        position_service.clone(),
        core_config.clone(),
    ));

    Ok(Arc::new(AppState {
        stock_service: Arc::new(StockService::new(stock_repo, core_config.clone())),
        portfolio_service: Arc::new(PortfolioService::new(portfolio_repo)),
        position_service,
        transaction_service,
        holdings_service: Arc::new(HoldingsService::new(transaction_repo)),
        balance_service: Arc::new(BalanceService::new(balance_repo, core_config.clone())),
        target_service: Arc::new(TargetService::new(target_repo)),
        journal_service: Arc::new(JournalService::new(journal_repo, core_config)),
        db_path,
    }))
}
