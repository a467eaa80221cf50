mod analytics;
mod embedding;
mod feedback;
mod match_result;
mod match_statistics;
mod recommendation;
mod weight_history;
mod weights;

pub use analytics::{FeedbackAnalytics, LabelStatistics, WeightsSnapshot};
pub use embedding::Embedding;
pub use feedback::{FeedbackEntry, FeedbackLabel, NewFeedback};
pub use match_result::{MatchFailure, MatchOutcome, MatchResult};
pub use match_statistics::MatchStatistics;
pub use recommendation::Recommendation;
pub use weight_history::{NewWeightHistory, WeightHistoryRecord};
pub use weights::WeightParameters;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
