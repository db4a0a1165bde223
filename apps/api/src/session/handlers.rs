use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::session::SessionSnapshot;
use crate::state::AppState;

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.read().await;
    Json(session.snapshot(state.in_flight.is_active()))
}

/// POST /api/v1/reset
///
/// Clears uploads, job description and results. Refused while a screening is in flight.
///
/// The flag is checked under the write lock: a screening that has not yet taken the
/// flag will read the cleared session.
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.write().await;
    if state.in_flight.is_active() {
        return Err(AppError::Conflict(
            "Cannot reset while a screening is in progress".to_string(),
        ));
    }

    session.reset();
    info!("Session reset");

    Ok(Json(session.snapshot(false)))
}
