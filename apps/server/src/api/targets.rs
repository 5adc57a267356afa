use std::sync::Arc;

use super::blocking;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{NewTargetRequest, TargetQuery},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockbook_core::targets::Target;

async fn list_targets(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<TargetQuery>,
) -> ApiResult<Json<Vec<Target>>> {
    let status = query.status()?;
    let targets = blocking(move || Ok(state.target_service.list_targets(&id, status)?)).await?;
    Ok(Json(targets))
}

async fn create_target(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTargetRequest>,
) -> ApiResult<(StatusCode, Json<Target>)> {
    let new_target = payload.into_domain(id)?;
    let target = blocking(move || Ok(state.target_service.create_target(new_target)?)).await?;
    Ok((StatusCode::CREATED, Json(target)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/portfolios/{id}/targets",
        get(list_targets).post(create_target),
    )
}
