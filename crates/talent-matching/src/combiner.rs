//! Weighted blend of similarity and screening into a 0–10 final score.

use talent_core::constants::{FINAL_SCORE_MAX, SCREENING_SCORE_MAX};
use talent_core::errors::{TalentResult, ValidationError};
use talent_core::models::{round_to, MatchResult, Recommendation, WeightParameters};

use crate::explanation;

fn check_range(field: &str, value: f64, min: f64, max: f64) -> TalentResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteScore {
            field: field.to_string(),
        }
        .into());
    }
    if value < min || value > max {
        return Err(ValidationError::ScoreOutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

/// Reject a screening score that is non-finite or outside [0, 10].
pub fn validate_screening(screening_score: f64) -> TalentResult<()> {
    check_range("screening_score", screening_score, 0.0, SCREENING_SCORE_MAX)
}

/// Unrounded final score: `(ws * sim + wsc * screening / 10) * 10`.
pub fn weighted_score(similarity: f64, screening_score: f64, weights: &WeightParameters) -> f64 {
    (weights.similarity_weight * similarity
        + weights.screening_weight * (screening_score / SCREENING_SCORE_MAX))
        * FINAL_SCORE_MAX
}

/// Build a `MatchResult` from a similarity in [0, 1] and a screening score
/// in [0, 10]. The tier is read off the unrounded score; only the reported
/// scores are rounded.
pub fn compute_match(
    similarity: f64,
    screening_score: f64,
    weights: &WeightParameters,
    candidate_id: &str,
    job_id: &str,
) -> TalentResult<MatchResult> {
    check_range("similarity", similarity, 0.0, 1.0)?;
    validate_screening(screening_score)?;

    let raw_score = weighted_score(similarity, screening_score, weights);
    Ok(MatchResult {
        candidate_id: candidate_id.to_string(),
        job_id: job_id.to_string(),
        similarity_score: round_to(similarity, 3),
        screening_score: round_to(screening_score, 2),
        final_score: round_to(raw_score, 2),
        recommendation: Recommendation::from_score(raw_score),
        explanation: explanation::explain(similarity, screening_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_blend() {
        let result = compute_match(0.9, 8.0, &WeightParameters::default(), "c1", "j1").unwrap();
        assert!((result.final_score - 8.6).abs() < 1e-9);
        assert_eq!(result.recommendation, Recommendation::StrongMatch);
        assert_eq!(result.similarity_score, 0.9);
        assert_eq!(result.screening_score, 8.0);
        assert_eq!(result.candidate_id, "c1");
    }

    #[test]
    fn weak_pair_is_poor_match() {
        let result = compute_match(0.5, 3.0, &WeightParameters::default(), "", "").unwrap();
        assert!((result.final_score - 4.2).abs() < 1e-9);
        assert_eq!(result.recommendation, Recommendation::PoorMatch);
    }

    #[test]
    fn screening_out_of_range_is_rejected() {
        let weights = WeightParameters::default();
        let err = compute_match(0.9, 11.0, &weights, "", "").unwrap_err();
        assert!(err.is_input_error());
        assert!(compute_match(0.9, -0.1, &weights, "", "").is_err());
        assert!(compute_match(0.9, f64::NAN, &weights, "", "").is_err());
    }

    #[test]
    fn screening_bounds_are_accepted() {
        let weights = WeightParameters::default();
        assert!(compute_match(0.5, 0.0, &weights, "", "").is_ok());
        assert!(compute_match(0.5, 10.0, &weights, "", "").is_ok());
    }

    #[test]
    fn tier_follows_unrounded_score() {
        // Raw 7.99598 reports as 8.0 but stays a GOOD MATCH.
        let result = compute_match(0.79933, 8.0, &WeightParameters::default(), "", "").unwrap();
        assert_eq!(result.final_score, 8.0);
        assert_eq!(result.recommendation, Recommendation::GoodMatch);
    }

    #[test]
    fn screening_is_rounded_to_two_places() {
        let result = compute_match(0.5, 7.4567, &WeightParameters::default(), "", "").unwrap();
        assert_eq!(result.screening_score, 7.46);
    }

    #[test]
    fn similarity_is_rounded_to_three_places() {
        let result = compute_match(0.87654, 7.0, &WeightParameters::default(), "", "").unwrap();
        assert_eq!(result.similarity_score, 0.877);
    }
}
