use std::sync::Arc;

use super::blocking;
use crate::{error::ApiResult, main_lib::AppState, models::NewStockRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockbook_core::stocks::Stock;

async fn list_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = blocking(move || Ok(state.stock_service.list_stocks()?)).await?;
    Ok(Json(stocks))
}

async fn create_stock(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStockRequest>,
) -> ApiResult<(StatusCode, Json<Stock>)> {
    let new_stock = payload.into_domain()?;
    let stock = blocking(move || Ok(state.stock_service.create_stock(new_stock)?)).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

async fn get_stock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Stock>> {
    let stock = blocking(move || Ok(state.stock_service.get_stock(&id)?)).await?;
    Ok(Json(stock))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks).post(create_stock))
        .route("/stocks/{id}", get(get_stock))
}
