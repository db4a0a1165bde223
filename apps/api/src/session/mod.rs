//! The single screening session owned by the service.

pub mod handlers;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::models::upload::{FileSummary, UploadedFile};
use crate::screening::table::{SortField, SortState};

/// One successful screening run. Replaced wholesale by the next run or cleared by reset.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    /// Normalized candidates in the order the ranking service returned them.
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default)]
pub struct Session {
    pub resumes: Vec<UploadedFile>,
    pub job_description: String,
    /// Binary job description documents: recorded, never parsed.
    pub job_files: Vec<UploadedFile>,
    pub sort: SortState,
    expanded: HashSet<String>,
    results: Option<ResultSet>,
}

impl Session {
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Installs a new result set. Only the screening orchestrator's success path calls
    /// this; failed runs never touch the previous results.
    pub(crate) fn publish_results(&mut self, results: ResultSet) {
        self.expanded.clear();
        self.results = Some(results);
    }

    pub fn toggle_sort(&mut self, field: SortField) -> SortState {
        self.sort = self.sort.toggle(field);
        self.sort
    }

    /// Flips the expansion of one row. Returns the new state, or `None` if no row has
    /// that id in the current results.
    pub fn toggle_expanded(&mut self, candidate_id: &str) -> Option<bool> {
        let known = self
            .results
            .as_ref()
            .is_some_and(|r| r.candidates.iter().any(|c| c.id == candidate_id));
        if !known {
            return None;
        }
        if self.expanded.remove(candidate_id) {
            Some(false)
        } else {
            self.expanded.insert(candidate_id.to_string());
            Some(true)
        }
    }

    /// Clears uploads, the job description and results. Sort preference is kept.
    pub fn reset(&mut self) {
        self.resumes.clear();
        self.job_description.clear();
        self.job_files.clear();
        self.expanded.clear();
        self.results = None;
    }

    pub fn snapshot(&self, in_flight: bool) -> SessionSnapshot {
        SessionSnapshot {
            resumes: self.resumes.iter().map(FileSummary::from).collect(),
            job_description: self.job_description.clone(),
            job_files: self.job_files.iter().map(FileSummary::from).collect(),
            in_flight,
            can_screen: !in_flight
                && !self.resumes.is_empty()
                && !self.job_description.trim().is_empty(),
            result_count: self.results.as_ref().map(|r| r.candidates.len()),
            last_run_id: self.results.as_ref().map(|r| r.run_id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub resumes: Vec<FileSummary>,
    pub job_description: String,
    pub job_files: Vec<FileSummary>,
    pub in_flight: bool,
    /// Mirrors the enabled state of the screen control.
    pub can_screen: bool,
    pub result_count: Option<usize>,
    pub last_run_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::RawCandidate;
    use crate::models::upload::PDF_MIME;
    use crate::screening::normalize::normalize_batch;
    use bytes::Bytes;

    fn result_set(ids: &[&str]) -> ResultSet {
        let raw = ids
            .iter()
            .map(|id| RawCandidate {
                id: Some(id.to_string()),
                name: None,
                fit_score: -3.0,
                total_experience: 1.0,
                skills: vec![],
                education: vec![],
                email: None,
                mobile_number: None,
                summary: None,
            })
            .collect();
        ResultSet {
            run_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            candidates: normalize_batch(raw),
        }
    }

    #[test]
    fn test_toggle_expanded_unknown_row() {
        let mut session = Session::default();
        assert_eq!(session.toggle_expanded("a.pdf"), None);
        session.publish_results(result_set(&["a.pdf"]));
        assert_eq!(session.toggle_expanded("b.pdf"), None);
    }

    #[test]
    fn test_toggle_expanded_flips() {
        let mut session = Session::default();
        session.publish_results(result_set(&["a.pdf", "b.pdf"]));
        assert_eq!(session.toggle_expanded("a.pdf"), Some(true));
        assert!(session.expanded().contains("a.pdf"));
        assert_eq!(session.toggle_expanded("a.pdf"), Some(false));
        assert!(session.expanded().is_empty());
    }

    #[test]
    fn test_publish_replaces_results_and_clears_expansion() {
        let mut session = Session::default();
        session.publish_results(result_set(&["a.pdf"]));
        session.toggle_expanded("a.pdf");
        session.publish_results(result_set(&["b.pdf", "c.pdf"]));
        assert!(session.expanded().is_empty());
        assert_eq!(session.results().unwrap().candidates.len(), 2);
    }

    #[test]
    fn test_reset_clears_everything_but_sort() {
        let mut session = Session::default();
        session.resumes.push(UploadedFile::new("a.pdf", PDF_MIME, Bytes::from_static(b"%PDF")));
        session.job_description = "Rust engineer".to_string();
        session.toggle_sort(SortField::Name);
        session.publish_results(result_set(&["a.pdf"]));

        session.reset();

        assert!(session.resumes.is_empty());
        assert!(session.job_description.is_empty());
        assert!(session.results().is_none());
        assert_eq!(session.sort.field, SortField::Name);
    }

    #[test]
    fn test_snapshot_can_screen() {
        let mut session = Session::default();
        assert!(!session.snapshot(false).can_screen);
        session.resumes.push(UploadedFile::new("a.pdf", PDF_MIME, Bytes::new()));
        session.job_description = "   ".to_string();
        assert!(!session.snapshot(false).can_screen);
        session.job_description = "Backend role".to_string();
        assert!(session.snapshot(false).can_screen);
        assert!(!session.snapshot(true).can_screen);
    }
}
