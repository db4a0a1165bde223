//! Submission orchestrator: validates the session, runs one ranking call and
//! publishes the normalized result set.
//!
//! Failure never touches the stored results: the only write to `Session` results is on
//! the success path below.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::notice::Notice;
use crate::models::upload::UploadedFile;
use crate::ranking::{RankError, RankRequest, Ranker};
use crate::screening::normalize::normalize_batch;
use crate::session::{ResultSet, Session};

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no resumes uploaded")]
    NoResumes,

    #[error("job description is empty")]
    EmptyJobDescription,

    #[error("a screening request is already in flight")]
    AlreadyInFlight,

    #[error("ranking failed: {0}")]
    Ranking(#[from] RankError),
}

impl ScreenError {
    /// The notification shown for this failure. Ranking failures get a generic message;
    /// their detail only goes to the log.
    pub fn notice(&self) -> Notice {
        match self {
            ScreenError::NoResumes => Notice::destructive(
                "No resumes uploaded",
                "Please upload at least one resume to screen.",
            ),
            ScreenError::EmptyJobDescription => Notice::destructive(
                "Job description missing",
                "Please provide a job description to match candidates against.",
            ),
            ScreenError::AlreadyInFlight => Notice::destructive(
                "Screening in progress",
                "Please wait for the current screening to finish.",
            ),
            ScreenError::Ranking(_) => Notice::destructive(
                "Screening failed",
                "An error occurred while screening candidates.",
            ),
        }
    }
}

/// The in-flight flag. At most one guard exists at a time.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Sets the flag if it was clear. The flag is cleared again when the guard drops,
    /// on every exit path.
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard(self.0.clone()))
    }
}

pub struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub run_id: Uuid,
    pub candidate_count: usize,
    pub notice: Notice,
}

/// Checks the preconditions and builds the ranking request. No side effects.
pub fn prepare_request(
    resumes: &[UploadedFile],
    job_description: &str,
) -> Result<RankRequest, ScreenError> {
    if resumes.is_empty() {
        return Err(ScreenError::NoResumes);
    }
    if job_description.trim().is_empty() {
        return Err(ScreenError::EmptyJobDescription);
    }
    Ok(RankRequest {
        job_description: job_description.to_string(),
        files: resumes.to_vec(),
    })
}

/// Screens the session's resumes against its job description.
///
/// Validation failures and a concurrent run are rejected before any network call.
/// The in-flight flag is taken before the session is read, so a reset either lands
/// first or is refused. No lock is held while the ranking call is outstanding.
pub async fn screen(
    ranker: &dyn Ranker,
    session: &RwLock<Session>,
    in_flight: &InFlight,
) -> Result<ScreeningOutcome, ScreenError> {
    let _guard = in_flight.try_acquire().ok_or_else(|| {
        warn!("Screening rejected: another request is in flight");
        ScreenError::AlreadyInFlight
    })?;

    let request = {
        let session = session.read().await;
        prepare_request(&session.resumes, &session.job_description)
    }
    .inspect_err(|e| warn!("Screening rejected: {e}"))?;

    let run_id = Uuid::new_v4();
    info!(%run_id, resumes = request.files.len(), "Submitting screening request");

    let raw = ranker.rank(request).await.map_err(|e| {
        error!(%run_id, "Screening request failed: {e}");
        ScreenError::Ranking(e)
    })?;

    let candidates = normalize_batch(raw);
    let candidate_count = candidates.len();

    session.write().await.publish_results(ResultSet {
        run_id,
        completed_at: Utc::now(),
        candidates,
    });

    info!(%run_id, candidate_count, "Screening complete");

    Ok(ScreeningOutcome {
        run_id,
        candidate_count,
        notice: Notice::info(
            "Screening complete",
            format!("{candidate_count} candidates analyzed."),
        ),
    })
}
