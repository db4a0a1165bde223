//! Axum route handlers for resume and job description uploads.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::notice::Notice;
use crate::models::upload::{FileSummary, UploadedFile};
use crate::state::AppState;
use crate::upload::files::{add_files, remove_file};
use crate::upload::job_description::{load_job_description_file, JobDescriptionUpdate};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<FileSummary>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    pub text: String,
    pub job_files: Vec<FileSummary>,
    pub notices: Vec<Notice>,
}

/// Collects every file part named `field_name`; other parts are drained and ignored.
async fn read_file_parts(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            field.bytes().await?;
            continue;
        }
        let name = field
            .file_name()
            .filter(|n| !n.is_empty())
            .map(String::from)
            .ok_or_else(|| AppError::Validation(format!("'{field_name}' part has no file name")))?;
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        files.push(UploadedFile::new(name, mime_type, data));
    }
    Ok(files)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Multipart body with one or more `files` parts. Unsupported types are dropped with a
/// single notice; the rest are appended unless a file with the same name is present.
pub async fn handle_add_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeListResponse>, AppError> {
    let incoming = read_file_parts(&mut multipart, "files").await?;

    let mut session = state.session.write().await;
    let outcome = add_files(&session.resumes, incoming);
    if outcome.rejected > 0 {
        warn!(rejected = outcome.rejected, "Dropped resumes with unsupported types");
    }
    info!(
        accepted = outcome.accepted,
        total = outcome.files.len(),
        "Resumes added"
    );
    session.resumes = outcome.files;

    Ok(Json(ResumeListResponse {
        resumes: session.resumes.iter().map(FileSummary::from).collect(),
        notices: outcome.notice.into_iter().collect(),
    }))
}

/// DELETE /api/v1/resumes/:name
pub async fn handle_remove_resume(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let mut session = state.session.write().await;
    if !session.resumes.iter().any(|f| f.name == name) {
        return Err(AppError::NotFound(format!("Resume '{name}' not found")));
    }
    session.resumes = remove_file(&session.resumes, &name);

    Ok(Json(ResumeListResponse {
        resumes: session.resumes.iter().map(FileSummary::from).collect(),
        notices: vec![],
    }))
}

/// PUT /api/v1/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let mut session = state.session.write().await;
    session.job_description = request.text;

    Ok(Json(JobDescriptionResponse {
        text: session.job_description.clone(),
        job_files: session.job_files.iter().map(FileSummary::from).collect(),
        notices: vec![],
    }))
}

/// POST /api/v1/job-description/file
///
/// Multipart body with a single `file` part. Text files replace the job description;
/// PDF and DOCX are recorded as selected job files without being read.
pub async fn handle_upload_job_description(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let file = read_file_parts(&mut multipart, "file")
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("missing 'file' part".to_string()))?;

    let update = load_job_description_file(file);
    let notice = update.notice().clone();

    let mut session = state.session.write().await;
    match update {
        JobDescriptionUpdate::Text { text, .. } => session.job_description = text,
        JobDescriptionUpdate::Selected { file, .. } => {
            if !session.job_files.iter().any(|f| f.name == file.name) {
                session.job_files.push(file);
            }
        }
        JobDescriptionUpdate::Rejected { .. } => {
            warn!("Rejected job description upload with unsupported type");
        }
    }

    Ok(Json(JobDescriptionResponse {
        text: session.job_description.clone(),
        job_files: session.job_files.iter().map(FileSummary::from).collect(),
        notices: vec![notice],
    }))
}
