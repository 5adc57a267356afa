use std::sync::Arc;

use super::blocking;
use crate::{error::ApiResult, main_lib::AppState, models::NewTransactionRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use stockbook_core::transactions::{TradeResult, Transaction};

async fn list_transactions(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions =
        blocking(move || Ok(state.transaction_service.list_transactions(&id)?)).await?;
    Ok(Json(transactions))
}

async fn record_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TradeResult>)> {
    let new_transaction = payload.into_domain()?;
    let result = blocking(move || {
        Ok(state
            .transaction_service
            .record_transaction(new_transaction)?)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    blocking(move || Ok(state.transaction_service.delete_transaction(&id)?)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios/{id}/transactions", get(list_transactions))
        .route("/transactions", post(record_transaction))
        .route("/transactions/{id}", delete(delete_transaction))
}
