use serde::{Deserialize, Serialize};

/// One candidate record as returned by the ranking service.
///
/// Required fields fail the whole response when missing. Optional fields accept
/// both an absent key and an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Unbounded ranking signal, empirically within roughly [-10, 0].
    #[serde(rename = "fitScore")]
    pub fit_score: f64,
    pub total_experience: f64,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A candidate after normalization, ready for display.
///
/// Only built by `screening::normalize`; there is no way back to `RawCandidate`,
/// so stored results can never be normalized a second time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: Option<String>,
    pub display_name: String,
    pub fit_score: f64,
    pub total_experience: f64,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub summary: Option<String>,

    pub years_of_experience: f64,
    pub role_relevance: f64,
    pub match_probability: f64,
    pub skill_similarity: f64,
    pub experience_summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggested_questions: Vec<String>,
}
