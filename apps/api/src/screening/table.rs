use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "matchProbability")]
    MatchProbability,
    #[serde(rename = "skillSimilarity")]
    SkillSimilarity,
    #[serde(rename = "fitScore")]
    FitScore,
    #[serde(rename = "experience")]
    Experience,
}

impl SortField {
    /// Direction applied when the user switches to this field.
    /// Names read alphabetically; scores and experience show top performers first.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortField::Name => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "matchProbability" => Ok(SortField::MatchProbability),
            "skillSimilarity" => Ok(SortField::SkillSimilarity),
            "fitScore" => Ok(SortField::FitScore),
            "experience" => Ok(SortField::Experience),
            other => Err(format!(
                "unknown sort field '{other}' (expected name, matchProbability, skillSimilarity, fitScore or experience)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::FitScore,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Same field flips the direction; a new field starts at its default direction.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: field.default_direction(),
            }
        }
    }
}

/// Case-folded comparison with the raw strings as tie-breaker, so the order is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_by(field: SortField, a: &Candidate, b: &Candidate) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.display_name, &b.display_name),
        SortField::MatchProbability => a.match_probability.total_cmp(&b.match_probability),
        SortField::SkillSimilarity => a.skill_similarity.total_cmp(&b.skill_similarity),
        SortField::FitScore => a.fit_score.total_cmp(&b.fit_score),
        SortField::Experience => a.years_of_experience.total_cmp(&b.years_of_experience),
    }
}

/// Returns the candidates ordered by `field`. Stable; the input is left untouched.
pub fn sort(candidates: &[Candidate], field: SortField, direction: SortDirection) -> Vec<&Candidate> {
    let mut ordered: Vec<&Candidate> = candidates.iter().collect();
    ordered.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    ordered
}
