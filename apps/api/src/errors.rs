use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::notice::Notice;
use crate::screening::orchestrator::ScreenError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Screening error: {0}")]
    Screening(#[from] ScreenError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, notice) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                "CONFLICT",
                msg.clone(),
                Some(Notice::destructive("Screening in progress", msg.clone())),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
                Some(Notice::destructive(
                    "Upload too large",
                    "The selected files exceed the upload size limit.",
                )),
            ),
            AppError::Screening(e) => {
                let notice = e.notice();
                match e {
                    ScreenError::NoResumes | ScreenError::EmptyJobDescription => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        e.to_string(),
                        Some(notice),
                    ),
                    ScreenError::AlreadyInFlight => (
                        StatusCode::CONFLICT,
                        "SCREENING_IN_FLIGHT",
                        e.to_string(),
                        Some(notice),
                    ),
                    ScreenError::Ranking(_) => (
                        StatusCode::BAD_GATEWAY,
                        "RANKING_ERROR",
                        "The ranking service could not screen these candidates".to_string(),
                        Some(notice),
                    ),
                }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
                "notice": notice
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_screen_error_is_bad_request_with_notice() {
        let response = AppError::from(ScreenError::NoResumes).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["notice"]["title"], "No resumes uploaded");
        assert_eq!(body["error"]["notice"]["variant"], "destructive");
    }

    #[tokio::test]
    async fn test_ranking_error_hides_upstream_detail() {
        let err = ScreenError::Ranking(RankError::Api {
            status: 500,
            message: "Traceback: secret internals".to_string(),
        });
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await.to_string();
        assert!(!body.contains("secret internals"));
        assert!(body.contains("Screening failed"));
    }

    #[tokio::test]
    async fn test_not_found_has_null_notice() {
        let response = AppError::NotFound("No screening results yet".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"]["notice"].is_null());
    }
}
