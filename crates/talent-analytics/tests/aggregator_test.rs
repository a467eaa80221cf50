use std::sync::Arc;

use talent_core::errors::{StorageError, TalentResult};
use talent_core::models::{
    FeedbackEntry, FeedbackLabel, LabelStatistics, NewFeedback, NewWeightHistory,
    WeightHistoryRecord, WeightParameters,
};
use talent_core::traits::{IFeedbackStorage, IWeightHistoryStorage};
use talent_analytics::AnalyticsAggregator;
use talent_storage::StorageEngine;

fn seeded() -> (Arc<StorageEngine>, AnalyticsAggregator) {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let rows = [
        ("c-1", 8.5, "Good Fit"),
        ("c-2", 7.25, "Good Fit"),
        ("c-3", 9.0, "Good Fit"),
        ("c-4", 4.0, "Not a Fit"),
    ];
    for (candidate, score, label) in rows {
        engine
            .record(&NewFeedback::parse(candidate, "hm-1", score, label, None).unwrap())
            .unwrap();
    }
    let aggregator = AnalyticsAggregator::new(engine.clone(), engine.clone());
    (engine, aggregator)
}

#[test]
fn report_counts_ratios_and_means() {
    let (_, aggregator) = seeded();
    let report = aggregator.feedback_analytics(&WeightParameters::default());

    assert!(!report.is_degraded());
    assert_eq!(report.total_feedback, 4);
    assert_eq!(report.good_fit_count, 3);
    assert_eq!(report.not_fit_count, 1);
    assert_eq!(report.good_fit_percentage, 75.0);
    assert_eq!(report.not_fit_percentage, 25.0);

    let good = report
        .score_statistics
        .iter()
        .find(|s| s.feedback == FeedbackLabel::GoodFit)
        .unwrap();
    assert_eq!(good.count, 3);
    assert_eq!(good.average_score, 8.25);
    assert_eq!(report.current_weights.total_feedback, 4);
    assert_eq!(report.current_weights.similarity_weight, 0.6);
}

#[test]
fn empty_store_reports_zeros_without_error() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let aggregator = AnalyticsAggregator::new(engine.clone(), engine);
    let report = aggregator.feedback_analytics(&WeightParameters::default());
    assert!(!report.is_degraded());
    assert_eq!(report.total_feedback, 0);
    assert_eq!(report.good_fit_percentage, 0.0);
    assert!(report.score_statistics.is_empty());
}

#[test]
fn snapshot_is_stable_between_calls() {
    let (_, aggregator) = seeded();
    let weights = WeightParameters::default();
    assert_eq!(aggregator.weights_snapshot(&weights), aggregator.weights_snapshot(&weights));
}

#[test]
fn history_is_most_recent_first_and_limited() {
    let (engine, aggregator) = seeded();
    for i in 0..4 {
        let weights = WeightParameters::new(0.6 - i as f64 * 0.05, 0.4 + i as f64 * 0.05, 0.5);
        engine
            .append(&NewWeightHistory::from_weights(&weights, format!("pass {i}"), 5))
            .unwrap();
    }
    let history = aggregator.weight_history(3);
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].trigger_action, "pass 3");
    assert_eq!(history[2].trigger_action, "pass 1");
}

struct OfflineStore;

fn offline<T>() -> TalentResult<T> {
    Err(StorageError::SqliteError {
        message: "unable to open database file".into(),
    }
    .into())
}

impl IFeedbackStorage for OfflineStore {
    fn record(&self, _entry: &NewFeedback) -> TalentResult<i64> {
        offline()
    }
    fn count(&self) -> TalentResult<usize> {
        offline()
    }
    fn recent(&self, _limit: usize) -> TalentResult<Vec<FeedbackEntry>> {
        offline()
    }
    fn all(&self) -> TalentResult<Vec<FeedbackEntry>> {
        offline()
    }
    fn label_statistics(&self) -> TalentResult<Vec<LabelStatistics>> {
        offline()
    }
}

impl IWeightHistoryStorage for OfflineStore {
    fn append(&self, _record: &NewWeightHistory) -> TalentResult<i64> {
        offline()
    }
    fn recent_history(&self, _limit: usize) -> TalentResult<Vec<WeightHistoryRecord>> {
        offline()
    }
    fn latest_history(&self) -> TalentResult<Option<WeightHistoryRecord>> {
        offline()
    }
    fn history_count(&self) -> TalentResult<usize> {
        offline()
    }
}

#[test]
fn store_failure_degrades_instead_of_propagating() {
    let store = Arc::new(OfflineStore);
    let aggregator = AnalyticsAggregator::new(store.clone(), store);
    let weights = WeightParameters::default();

    let report = aggregator.feedback_analytics(&weights);
    assert!(report.is_degraded());
    assert!(report.error.as_deref().unwrap().contains("unable to open database file"));
    assert_eq!(report.total_feedback, 0);
    assert_eq!(report.current_weights.similarity_weight, 0.6);

    assert_eq!(aggregator.weights_snapshot(&weights).total_feedback, 0);
    assert!(aggregator.weight_history(10).is_empty());
}
