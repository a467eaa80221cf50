use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FeedbackLabel;

/// Per-label feedback statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelStatistics {
    pub feedback: FeedbackLabel,
    pub average_score: f64,
    pub count: usize,
}

/// Point-in-time view of the live weights, as shown on the monitoring display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightsSnapshot {
    pub similarity_weight: f64,
    pub screening_weight: f64,
    pub confidence: f64,
    pub total_feedback: usize,
    pub updated_at: DateTime<Utc>,
}

/// Feedback report. On storage failure every count is zero and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackAnalytics {
    pub total_feedback: usize,
    pub good_fit_count: usize,
    pub not_fit_count: usize,
    pub good_fit_percentage: f64,
    pub not_fit_percentage: f64,
    pub score_statistics: Vec<LabelStatistics>,
    pub current_weights: WeightsSnapshot,
    pub error: Option<String>,
}

impl FeedbackAnalytics {
    /// Zero-valued payload carrying the failure reason.
    pub fn degraded(error: impl Into<String>, current_weights: WeightsSnapshot) -> Self {
        Self {
            total_feedback: 0,
            good_fit_count: 0,
            not_fit_count: 0,
            good_fit_percentage: 0.0,
            not_fit_percentage: 0.0,
            score_statistics: Vec::new(),
            current_weights,
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
