//! AnalyticsAggregator: counts, ratios, per-label score statistics, weight
//! snapshots, and the history listing.

use std::sync::Arc;

use tracing::debug;

use talent_core::errors::TalentResult;
use talent_core::models::{
    round_to, FeedbackAnalytics, FeedbackLabel, LabelStatistics, WeightHistoryRecord,
    WeightParameters, WeightsSnapshot,
};
use talent_core::traits::{IFeedbackStorage, IWeightHistoryStorage};
use talent_observability::tracing_setup::events;

pub struct AnalyticsAggregator {
    feedback: Arc<dyn IFeedbackStorage>,
    history: Arc<dyn IWeightHistoryStorage>,
}

impl AnalyticsAggregator {
    pub fn new(feedback: Arc<dyn IFeedbackStorage>, history: Arc<dyn IWeightHistoryStorage>) -> Self {
        Self { feedback, history }
    }

    /// Weights rounded to 3 decimals with the live feedback total. The total
    /// reads as 0 if the store is unavailable.
    pub fn weights_snapshot(&self, weights: &WeightParameters) -> WeightsSnapshot {
        let total_feedback = self.feedback.count().unwrap_or_else(|e| {
            events::analytics_degraded("weights_snapshot", &e.to_string());
            0
        });
        snapshot(weights, total_feedback)
    }

    /// Full feedback report. Never fails.
    pub fn feedback_analytics(&self, weights: &WeightParameters) -> FeedbackAnalytics {
        match self.try_feedback_analytics(weights) {
            Ok(report) => report,
            Err(e) => {
                let message = e.to_string();
                events::analytics_degraded("feedback_analytics", &message);
                FeedbackAnalytics::degraded(message, snapshot(weights, 0))
            }
        }
    }

    /// Up to `limit` history records, most recent first; empty on store error.
    pub fn weight_history(&self, limit: usize) -> Vec<WeightHistoryRecord> {
        self.history.recent_history(limit).unwrap_or_else(|e| {
            events::analytics_degraded("weight_history", &e.to_string());
            Vec::new()
        })
    }

    fn try_feedback_analytics(&self, weights: &WeightParameters) -> TalentResult<FeedbackAnalytics> {
        let total = self.feedback.count()?;
        let per_label = self.feedback.label_statistics()?;

        let count_of = |label: FeedbackLabel| {
            per_label
                .iter()
                .find(|s| s.feedback == label)
                .map_or(0, |s| s.count)
        };
        let good_fit_count = count_of(FeedbackLabel::GoodFit);
        let not_fit_count = count_of(FeedbackLabel::NotAFit);

        let score_statistics = per_label
            .iter()
            .map(|s| LabelStatistics {
                feedback: s.feedback,
                average_score: round_to(s.average_score, 2),
                count: s.count,
            })
            .collect();

        debug!(total, good_fit_count, not_fit_count, "feedback analytics computed");
        Ok(FeedbackAnalytics {
            total_feedback: total,
            good_fit_count,
            not_fit_count,
            good_fit_percentage: percentage(good_fit_count, total),
            not_fit_percentage: percentage(not_fit_count, total),
            score_statistics,
            current_weights: snapshot(weights, total),
            error: None,
        })
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(count as f64 / total as f64 * 100.0, 1)
    }
}

fn snapshot(weights: &WeightParameters, total_feedback: usize) -> WeightsSnapshot {
    WeightsSnapshot {
        similarity_weight: round_to(weights.similarity_weight, 3),
        screening_weight: round_to(weights.screening_weight, 3),
        confidence: round_to(weights.confidence, 3),
        total_feedback,
        updated_at: weights.adjusted_at,
    }
}
