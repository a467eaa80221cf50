//! Batch ranking over many candidates for one job, plus pure helpers over
//! the resulting list: top-K, threshold filter, and aggregate statistics.

use serde::{Deserialize, Serialize};

use talent_core::constants::{DEFAULT_BATCH_SCREENING_SCORE, FAILED_MATCH_SCORE};
use talent_core::models::{round_to, Embedding, MatchOutcome, MatchStatistics};

/// One candidate of a batch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCandidate {
    pub candidate_id: String,
    pub embedding: Embedding,
    /// Missing scores are treated as a neutral 5.0.
    #[serde(default)]
    pub screening_score: Option<f64>,
}

impl BatchCandidate {
    pub fn new(
        candidate_id: impl Into<String>,
        embedding: impl Into<Embedding>,
        screening_score: Option<f64>,
    ) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            embedding: embedding.into(),
            screening_score,
        }
    }

    pub fn screening_or_default(&self) -> f64 {
        self.screening_score.unwrap_or(DEFAULT_BATCH_SCREENING_SCORE)
    }
}

/// Stable descending sort by final score. Failures (-1) sink to the bottom.
pub fn rank(outcomes: &mut [MatchOutcome]) {
    outcomes.sort_by(|a, b| b.final_score().total_cmp(&a.final_score()));
}

/// The `k` highest-scoring entries, best first.
pub fn top_k(outcomes: &[MatchOutcome], k: usize) -> Vec<MatchOutcome> {
    let mut ranked = outcomes.to_vec();
    rank(&mut ranked);
    ranked.truncate(k);
    ranked
}

/// Entries with `final_score >= min_score`, order preserved.
pub fn filter_by_threshold(outcomes: &[MatchOutcome], min_score: f64) -> Vec<MatchOutcome> {
    outcomes
        .iter()
        .filter(|outcome| outcome.final_score() >= min_score)
        .cloned()
        .collect()
}

/// Aggregates over every entry, sentinel failures included, so the figures
/// describe the batch exactly as it was ranked. An empty list yields zeros.
pub fn statistics(outcomes: &[MatchOutcome]) -> MatchStatistics {
    if outcomes.is_empty() {
        return MatchStatistics::default();
    }

    let scores: Vec<f64> = outcomes.iter().map(MatchOutcome::final_score).collect();
    let total = scores.len();
    let at_least = |min: f64| scores.iter().filter(|s| **s >= min).count();

    let above_6 = at_least(6.0);
    let above_7 = at_least(7.0);
    let above_8 = at_least(8.0);
    let strong_fraction = above_8 as f64 / total as f64;

    MatchStatistics {
        total_matches: total,
        failed_matches: scores.iter().filter(|s| **s == FAILED_MATCH_SCORE).count(),
        average_score: round_to(scores.iter().sum::<f64>() / total as f64, 2),
        max_score: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min_score: scores.iter().copied().fold(f64::INFINITY, f64::min),
        matches_above_6: above_6,
        matches_above_7: above_7,
        matches_above_8: above_8,
        good_match_fraction: above_7 as f64 / total as f64,
        strong_match_fraction: strong_fraction,
        strong_matches_percentage: round_to(strong_fraction * 100.0, 1),
    }
}
