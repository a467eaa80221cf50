use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate view over a batch ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchStatistics {
    pub total_matches: usize,
    /// Entries that carry the failure sentinel score.
    pub failed_matches: usize,
    pub average_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub matches_above_6: usize,
    pub matches_above_7: usize,
    pub matches_above_8: usize,
    /// Share of entries with final_score >= 7, in [0, 1].
    pub good_match_fraction: f64,
    /// Share of entries with final_score >= 8, in [0, 1].
    pub strong_match_fraction: f64,
    /// `strong_match_fraction` as a percentage rounded to 1 decimal.
    pub strong_matches_percentage: f64,
}
