//! Response normalizer: maps raw ranking output into bounded display metrics.
//!
//! Pure and deterministic. Apply exactly once per ranking response: the formulas are
//! offset rescalings, so feeding an already-normalized value back in would shift it again.

use std::collections::HashSet;

use crate::models::candidate::{Candidate, RawCandidate};

/// Offset applied to the raw fit score before scaling to `fitScore`.
const FIT_OFFSET: f64 = 10.0;
/// Offset applied to the raw fit score before scaling to `skillSimilarity`.
const SKILL_OFFSET: f64 = 9.5;
/// Shared slope of both rescalings: width of the observed raw range [-10, 0].
const SCORE_SPAN: f64 = 10.0;
/// Placeholder, not derived from any input.
pub const DEFAULT_ROLE_RELEVANCE: f64 = 0.5;

pub const UNNAMED_CANDIDATE: &str = "Unnamed Candidate";
const NO_EXPERIENCE_SUMMARY: &str = "No experience summary available";

const GAPS: &[&str] = &[
    "Limited information available from resume scan",
    "Experience details need verification",
];

const SUGGESTED_QUESTIONS: &[&str] = &[
    "Can you elaborate on your professional experience?",
    "What specific skills do you have that match this position?",
    "How do your past roles relate to this job opportunity?",
];

/// `clamp((f + 10) / 10, 0, 1)`
pub fn rescale_fit_score(raw: f64) -> f64 {
    rescale(raw, FIT_OFFSET)
}

/// `clamp((f + 9.5) / 10, 0, 1)`
pub fn rescale_skill_similarity(raw: f64) -> f64 {
    rescale(raw, SKILL_OFFSET)
}

fn rescale(raw: f64, offset: f64) -> f64 {
    let scaled = (raw + offset) / SCORE_SPAN;
    // NaN would slip through clamp and poison sorting.
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 1.0)
}

/// `name`, then the part of `id` before the first `.`, then a literal placeholder.
pub fn display_name(name: Option<&str>, id: Option<&str>) -> String {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    id.and_then(|id| id.split('.').next())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(UNNAMED_CANDIDATE)
        .to_string()
}

fn strengths(skill_count: usize, education_count: usize) -> Vec<String> {
    vec![
        "Based on resume analysis".to_string(),
        if skill_count > 0 {
            format!("Has {skill_count} relevant skills")
        } else {
            "Skills information limited".to_string()
        },
        if education_count > 0 {
            "Has formal education credentials".to_string()
        } else {
            "Education information limited".to_string()
        },
    ]
}

/// Normalizes a single raw record. The candidate id is the raw id or empty.
pub fn normalize(raw: RawCandidate) -> Candidate {
    let fit_score = rescale_fit_score(raw.fit_score);
    let skill_similarity = rescale_skill_similarity(raw.fit_score);
    let display_name = display_name(raw.name.as_deref(), raw.id.as_deref());
    let strengths = strengths(raw.skills.len(), raw.education.len());
    let experience_summary = raw
        .summary
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_EXPERIENCE_SUMMARY.to_string());

    Candidate {
        id: raw.id.unwrap_or_default(),
        name: raw.name,
        display_name,
        fit_score,
        total_experience: raw.total_experience,
        skills: raw.skills,
        education: raw.education,
        email: raw.email,
        mobile_number: raw.mobile_number,
        summary: raw.summary,
        years_of_experience: raw.total_experience,
        role_relevance: DEFAULT_ROLE_RELEVANCE,
        match_probability: fit_score,
        skill_similarity,
        experience_summary,
        strengths,
        gaps: GAPS.iter().map(|g| g.to_string()).collect(),
        suggested_questions: SUGGESTED_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    }
}

/// Normalizes a full ranking response, keeping the received order.
///
/// Every row gets a distinct id, since ids key row expansion. Records without an id get
/// `candidate-<position>`, skipping any id the response itself uses; repeated ids get a
/// `-<n>` suffix from the second occurrence on.
pub fn normalize_batch(raw: Vec<RawCandidate>) -> Vec<Candidate> {
    let reserved: HashSet<String> = raw
        .iter()
        .filter_map(|r| r.id.clone())
        .filter(|id| !id.is_empty())
        .collect();
    let mut taken = HashSet::with_capacity(raw.len());

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut candidate = normalize(record);
            candidate.id = if candidate.id.is_empty() {
                unique_id(format!("candidate-{}", index + 1), |id| {
                    taken.contains(id) || reserved.contains(id)
                })
            } else {
                unique_id(std::mem::take(&mut candidate.id), |id| taken.contains(id))
            };
            taken.insert(candidate.id.clone());
            candidate
        })
        .collect()
}

fn unique_id(base: String, in_use: impl Fn(&str) -> bool) -> String {
    if !in_use(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{base}-{n}");
        if !in_use(&id) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fit_score: f64) -> RawCandidate {
        RawCandidate {
            id: None,
            name: None,
            fit_score,
            total_experience: 0.0,
            skills: vec![],
            education: vec![],
            email: None,
            mobile_number: None,
            summary: None,
        }
    }

    #[test]
    fn test_scenario_mid_range_candidate() {
        let candidate = normalize(RawCandidate {
            skills: vec!["a".to_string(), "b".to_string()],
            total_experience: 3.0,
            ..raw(-5.0)
        });
        assert!((candidate.fit_score - 0.5).abs() < 1e-9);
        assert!((candidate.skill_similarity - 0.45).abs() < 1e-9);
        assert!((candidate.match_probability - 0.5).abs() < 1e-9);
        assert_eq!(candidate.role_relevance, 0.5);
        assert_eq!(candidate.years_of_experience, 3.0);
        assert_eq!(candidate.strengths[1], "Has 2 relevant skills");
        assert_eq!(candidate.strengths[2], "Education information limited");
    }

    #[test]
    fn test_scores_stay_in_unit_range_within_observed_span() {
        let mut f = -10.0;
        while f <= 0.0 {
            let c = normalize(raw(f));
            assert!((0.0..=1.0).contains(&c.fit_score), "fit {f}");
            assert!((0.0..=1.0).contains(&c.skill_similarity), "skill {f}");
            f += 0.25;
        }
    }

    #[test]
    fn test_offset_between_metrics_is_constant_away_from_bounds() {
        for f in [-9.5, -8.0, -5.0, -2.25, 0.0] {
            let c = normalize(raw(f));
            assert!(
                (c.fit_score - c.skill_similarity - 0.05).abs() < 1e-9,
                "f={f}: fit={} skill={}",
                c.fit_score,
                c.skill_similarity
            );
        }
    }

    #[test]
    fn test_out_of_range_scores_clamp_exactly() {
        let low = normalize(raw(-42.0));
        assert_eq!(low.fit_score, 0.0);
        assert_eq!(low.skill_similarity, 0.0);
        assert_eq!(low.match_probability, 0.0);

        let high = normalize(raw(3.5));
        assert_eq!(high.fit_score, 1.0);
        assert_eq!(high.skill_similarity, 1.0);
    }

    #[test]
    fn test_nan_fit_score_becomes_zero() {
        let c = normalize(raw(f64::NAN));
        assert_eq!(c.fit_score, 0.0);
        assert_eq!(c.skill_similarity, 0.0);
    }

    #[test]
    fn test_display_name_fallback_chain() {
        assert_eq!(display_name(Some("Jane Doe"), Some("jd.pdf")), "Jane Doe");
        assert_eq!(display_name(None, Some("john_smith.resume.pdf")), "john_smith");
        assert_eq!(display_name(Some(""), Some("alex.docx")), "alex");
        assert_eq!(display_name(None, Some(".hidden")), UNNAMED_CANDIDATE);
        assert_eq!(display_name(None, None), UNNAMED_CANDIDATE);
    }

    #[test]
    fn test_narratives_use_counts_only() {
        let c = normalize(RawCandidate {
            education: vec!["BSc".to_string()],
            ..raw(-3.0)
        });
        assert_eq!(
            c.strengths,
            vec![
                "Based on resume analysis",
                "Skills information limited",
                "Has formal education credentials"
            ]
        );
        assert_eq!(c.gaps.len(), 2);
        assert_eq!(c.suggested_questions.len(), 3);
    }

    #[test]
    fn test_experience_summary_defaults() {
        assert_eq!(normalize(raw(-1.0)).experience_summary, NO_EXPERIENCE_SUMMARY);
        let c = normalize(RawCandidate {
            summary: Some("Ten years of backend work".to_string()),
            ..raw(-1.0)
        });
        assert_eq!(c.experience_summary, "Ten years of backend work");
    }

    #[test]
    fn test_batch_assigns_ids_to_anonymous_records() {
        let batch = normalize_batch(vec![
            raw(-1.0),
            RawCandidate {
                id: Some("maria.pdf".to_string()),
                ..raw(-2.0)
            },
            raw(-3.0),
        ]);
        let ids: Vec<_> = batch.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["candidate-1", "maria.pdf", "candidate-3"]);
        // Synthetic ids do not leak into the display name.
        assert_eq!(batch[0].display_name, UNNAMED_CANDIDATE);
        assert_eq!(batch[1].display_name, "maria");
    }

    #[test]
    fn test_batch_ids_are_unique() {
        let with_id = |id: &str, fit_score: f64| RawCandidate {
            id: Some(id.to_string()),
            ..raw(fit_score)
        };
        let batch = normalize_batch(vec![
            raw(-1.0),
            with_id("candidate-1", -2.0),
            with_id("a.pdf", -3.0),
            with_id("a.pdf", -4.0),
            with_id("a.pdf", -5.0),
        ]);

        let ids: Vec<_> = batch.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["candidate-1-2", "candidate-1", "a.pdf", "a.pdf-2", "a.pdf-3"]
        );
        // Display names still come from the id the service sent.
        assert_eq!(batch[3].display_name, "a");
    }
}
