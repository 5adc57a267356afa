use std::sync::Arc;

use super::blocking;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{LimitQuery, NewBalanceRequest},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockbook_core::balances::PortfolioBalance;

async fn get_history(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<Vec<PortfolioBalance>>> {
    let history =
        blocking(move || Ok(state.balance_service.get_history(&id, query.limit)?)).await?;
    Ok(Json(history))
}

async fn record_balance(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewBalanceRequest>,
) -> ApiResult<(StatusCode, Json<PortfolioBalance>)> {
    let new_balance = payload.into_domain(id)?;
    let balance = blocking(move || Ok(state.balance_service.record_balance(new_balance)?)).await?;
    Ok((StatusCode::CREATED, Json(balance)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/portfolios/{id}/balances",
        get(get_history).post(record_balance),
    )
}
