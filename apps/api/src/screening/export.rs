use crate::models::candidate::Candidate;

pub const CSV_FILENAME: &str = "resume_screening_results.csv";
pub const CSV_HEADER: &str = "Name,Match Probability,Skill Similarity,Fit Score,Experience,Email,Phone";

/// `0.73` → `"73%"`. Halves round away from zero.
pub fn format_percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// `3.0` → `"3 years"`, `2.5` → `"2.5 years"`.
pub fn format_years(years: f64) -> String {
    format!("{years} years")
}

/// Wraps a free-text value in quotes, doubling any embedded quote.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders candidates as CSV in the order given: one header row, one row per candidate.
pub fn to_csv<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for candidate in candidates {
        let row = [
            quote(&candidate.display_name),
            format_percent(candidate.match_probability),
            format_percent(candidate.skill_similarity),
            format_percent(candidate.fit_score),
            format_years(candidate.years_of_experience),
            quote(candidate.email.as_deref().unwrap_or_default()),
            quote(candidate.mobile_number.as_deref().unwrap_or_default()),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}
