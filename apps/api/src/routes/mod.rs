pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::screening::handlers as screening;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::upload::handlers as upload;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/reset", post(session::handle_reset))
        // Uploads
        .route("/api/v1/resumes", post(upload::handle_add_resumes))
        .route("/api/v1/resumes/:name", delete(upload::handle_remove_resume))
        .route(
            "/api/v1/job-description",
            put(upload::handle_set_job_description),
        )
        .route(
            "/api/v1/job-description/file",
            post(upload::handle_upload_job_description),
        )
        // Screening and results
        .route("/api/v1/screen", post(screening::handle_screen))
        .route("/api/v1/results", get(screening::handle_get_results))
        .route("/api/v1/results/export", get(screening::handle_export))
        .route(
            "/api/v1/results/sort/:field",
            post(screening::handle_toggle_sort),
        )
        .route(
            "/api/v1/results/:id/expand",
            post(screening::handle_toggle_expand),
        )
        .layer(body_limit)
        .with_state(state)
}
