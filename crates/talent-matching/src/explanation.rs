//! Human-readable explanation of a match score.

/// Similarity bands, highest first: (lower bound, phrase).
const SIMILARITY_BANDS: [(f64, &str); 3] = [
    (0.9, "Strong technical compatibility"),
    (0.7, "Good technical fit"),
    (0.5, "Moderate technical overlap"),
];
const SIMILARITY_FALLBACK: &str = "Limited technical match";

/// Screening bands on the 0–10 scale, highest first.
const SCREENING_BANDS: [(f64, &str); 3] = [
    (8.0, "Excellent screening performance"),
    (6.0, "Good screening results"),
    (4.0, "Acceptable responses"),
];
const SCREENING_FALLBACK: &str = "Poor screening performance";

fn band(value: f64, bands: &[(f64, &'static str)], fallback: &'static str) -> &'static str {
    bands
        .iter()
        .find(|(min, _)| value >= *min)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(fallback)
}

/// Phrase for the similarity signal with its percentage, e.g.
/// "Strong technical compatibility (90%)".
pub fn similarity_phrase(similarity: f64) -> String {
    format!(
        "{} ({:.0}%)",
        band(similarity, &SIMILARITY_BANDS, SIMILARITY_FALLBACK),
        similarity * 100.0
    )
}

/// Phrase for the screening signal, e.g. "Good screening results (7.5/10)".
pub fn screening_phrase(screening_score: f64) -> String {
    format!(
        "{} ({:.1}/10)",
        band(screening_score, &SCREENING_BANDS, SCREENING_FALLBACK),
        screening_score
    )
}

/// Both phrases joined into one sentence-style explanation.
pub fn explain(similarity: f64, screening_score: f64) -> String {
    format!(
        "{}. {}.",
        similarity_phrase(similarity),
        screening_phrase(screening_score)
    )
}
