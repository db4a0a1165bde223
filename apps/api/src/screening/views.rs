//! Table view assembly: sorted rows plus the display labels the results table renders.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::screening::export::{format_percent, format_years};
use crate::screening::table::{sort, SortState};
use crate::session::ResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 0.7 {
            ScoreBand::Strong
        } else if score >= 0.5 {
            ScoreBand::Moderate
        } else if score >= 0.3 {
            ScoreBand::Weak
        } else {
            ScoreBand::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillBadge {
    pub skill: String,
    pub tier: SkillTier,
}

/// `"3 years (Relevant)"`
pub fn experience_label(years: f64, role_relevance: f64) -> String {
    let relevance = if role_relevance >= 0.7 {
        "Highly Relevant"
    } else if role_relevance >= 0.4 {
        "Relevant"
    } else {
        "Less Relevant"
    };
    format!("{} ({relevance})", format_years(years))
}

/// Skills come back roughly in relevance order, so position stands in for relevance.
pub fn skill_badges(skills: &[String]) -> Vec<SkillBadge> {
    let total = skills.len().max(1) as f64;
    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let relevance = 1.0 - index as f64 / total;
            let tier = if relevance >= 0.8 {
                SkillTier::Primary
            } else if relevance >= 0.5 {
                SkillTier::Secondary
            } else {
                SkillTier::Outline
            };
            SkillBadge {
                skill: skill.clone(),
                tier,
            }
        })
        .collect()
}

pub fn education_text(education: &[String]) -> String {
    if education.is_empty() {
        "No education information available".to_string()
    } else {
        education.join(" • ")
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skill_badges: Vec<SkillBadge>,
    pub education_text: String,
    pub summary_text: String,
}

impl CandidateDetails {
    fn for_candidate(candidate: &Candidate) -> Self {
        Self {
            email: candidate.email.clone().filter(|e| !e.is_empty()),
            phone: candidate.mobile_number.clone().filter(|p| !p.is_empty()),
            skill_badges: skill_badges(&candidate.skills),
            education_text: education_text(&candidate.education),
            summary_text: candidate
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "No summary available".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow<'a> {
    #[serde(flatten)]
    pub candidate: &'a Candidate,
    pub match_label: String,
    pub match_band: ScoreBand,
    pub skill_label: String,
    pub skill_band: ScoreBand,
    pub fit_label: String,
    pub fit_band: ScoreBand,
    pub experience_label: String,
    pub expanded: bool,
    /// Present only for expanded rows.
    pub details: Option<CandidateDetails>,
}

impl<'a> CandidateRow<'a> {
    pub fn new(candidate: &'a Candidate, expanded: bool) -> Self {
        Self {
            candidate,
            match_label: format_percent(candidate.match_probability),
            match_band: ScoreBand::for_score(candidate.match_probability),
            skill_label: format_percent(candidate.skill_similarity),
            skill_band: ScoreBand::for_score(candidate.skill_similarity),
            fit_label: format_percent(candidate.fit_score),
            fit_band: ScoreBand::for_score(candidate.fit_score),
            experience_label: experience_label(
                candidate.years_of_experience,
                candidate.role_relevance,
            ),
            expanded,
            details: expanded.then(|| CandidateDetails::for_candidate(candidate)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView<'a> {
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub sort: SortState,
    pub total: usize,
    pub rows: Vec<CandidateRow<'a>>,
}

pub fn build_table_view<'a>(
    results: &'a ResultSet,
    sort_state: SortState,
    expanded: &HashSet<String>,
) -> TableView<'a> {
    let rows = sort(&results.candidates, sort_state.field, sort_state.direction)
        .into_iter()
        .map(|candidate| CandidateRow::new(candidate, expanded.contains(&candidate.id)))
        .collect();

    TableView {
        run_id: results.run_id,
        completed_at: results.completed_at,
        sort: sort_state,
        total: results.candidates.len(),
        rows,
    }
}
