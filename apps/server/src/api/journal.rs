use std::sync::Arc;

use super::blocking;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{LimitQuery, NewJournalEntryRequest},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockbook_core::journal::{JournalEntry, JournalEntryView};

async fn get_recent_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<Json<Vec<JournalEntryView>>> {
    let entries =
        blocking(move || Ok(state.journal_service.get_recent_entries(query.limit)?)).await?;
    Ok(Json(entries))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewJournalEntryRequest>,
) -> ApiResult<(StatusCode, Json<JournalEntry>)> {
    let new_entry = payload.into_domain()?;
    let entry = blocking(move || Ok(state.journal_service.create_entry(new_entry)?)).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/journal", get(get_recent_entries).post(create_entry))
}
