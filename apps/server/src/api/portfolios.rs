use std::sync::Arc;

use super::blocking;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{HoldingResponse, PortfolioListQuery},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockbook_core::{
    portfolios::{NewPortfolio, Portfolio},
    positions::Position,
};

async fn list_portfolios(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PortfolioListQuery>,
) -> ApiResult<Json<Vec<Portfolio>>> {
    let portfolios =
        blocking(move || Ok(state.portfolio_service.list_portfolios(query.active_only)?)).await?;
    Ok(Json(portfolios))
}

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPortfolio>,
) -> ApiResult<(StatusCode, Json<Portfolio>)> {
    let portfolio =
        blocking(move || Ok(state.portfolio_service.create_portfolio(payload)?)).await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

async fn get_positions(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    let positions = blocking(move || {
        state.portfolio_service.get_portfolio(&id)?;
        Ok(state.position_service.get_positions(&id)?)
    })
    .await?;
    Ok(Json(positions))
}

async fn get_holdings(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HoldingResponse>>> {
    let holdings = blocking(move || {
        state.portfolio_service.get_portfolio(&id)?;
        Ok(state.holdings_service.get_holdings(&id)?)
    })
    .await?
    .into_iter()
    .map(HoldingResponse::try_from)
    .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(holdings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios", get(list_portfolios).post(create_portfolio))
        .route("/portfolios/{id}/positions", get(get_positions))
        .route("/portfolios/{id}/holdings", get(get_holdings))
}
