//! Axum route handlers for screening and the results table.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::notice::Notice;
use crate::screening::export::{to_csv, CSV_FILENAME};
use crate::screening::orchestrator::screen;
use crate::screening::table::{sort, SortField};
use crate::screening::views::build_table_view;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub run_id: Uuid,
    pub candidate_count: usize,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub id: String,
    pub expanded: bool,
}

fn no_results() -> AppError {
    AppError::NotFound("No screening results yet".to_string())
}

/// POST /api/v1/screen
///
/// Runs one ranking round-trip for the current uploads and job description.
pub async fn handle_screen(State(state): State<AppState>) -> Result<Json<ScreenResponse>, AppError> {
    let outcome = screen(state.ranker.as_ref(), &state.session, &state.in_flight).await?;

    Ok(Json(ScreenResponse {
        run_id: outcome.run_id,
        candidate_count: outcome.candidate_count,
        notices: vec![outcome.notice],
    }))
}

/// GET /api/v1/results
///
/// The current result set, ordered by the session's sort state.
pub async fn handle_get_results(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let session = state.session.read().await;
    let results = session.results().ok_or_else(no_results)?;
    let view = build_table_view(results, session.sort, session.expanded());
    Ok(Json(serde_json::to_value(view).map_err(anyhow::Error::from)?))
}

/// POST /api/v1/results/sort/:field
///
/// Same field flips direction; a new field starts descending (ascending for `name`).
pub async fn handle_toggle_sort(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Value>, AppError> {
    let field: SortField = field.parse().map_err(AppError::Validation)?;

    let mut session = state.session.write().await;
    if session.results().is_none() {
        return Err(no_results());
    }
    session.toggle_sort(field);

    let results = session.results().ok_or_else(no_results)?;
    let view = build_table_view(results, session.sort, session.expanded());
    Ok(Json(serde_json::to_value(view).map_err(anyhow::Error::from)?))
}

/// POST /api/v1/results/:id/expand
pub async fn handle_toggle_expand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpandResponse>, AppError> {
    let mut session = state.session.write().await;
    let expanded = session
        .toggle_expanded(&id)
        .ok_or_else(|| AppError::NotFound(format!("Candidate '{id}' not found")))?;

    Ok(Json(ExpandResponse { id, expanded }))
}

/// GET /api/v1/results/export
///
/// CSV download in the table's current order.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = state.session.read().await;
    let results = session.results().ok_or_else(no_results)?;
    let ordered = sort(&results.candidates, session.sort.field, session.sort.direction);
    let csv = to_csv(ordered);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
