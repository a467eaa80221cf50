//! WeightAdapter over a real in-memory store: threshold, repeated passes,
//! reset, restore, and error isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use talent_core::config::LearningConfig;
use talent_core::errors::{StorageError, TalentResult};
use talent_core::models::{
    FeedbackEntry, LabelStatistics, NewFeedback, NewWeightHistory, WeightHistoryRecord,
};
use talent_core::traits::{IFeedbackStorage, IWeightHistoryStorage};
use talent_learning::WeightAdapter;
use talent_storage::StorageEngine;

fn adapter() -> (Arc<StorageEngine>, WeightAdapter) {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let adapter = WeightAdapter::new(engine.clone(), engine.clone(), LearningConfig::default());
    (engine, adapter)
}

fn verdict(i: usize, score: f64, label: &str) -> NewFeedback {
    NewFeedback::parse(format!("cand-{i}"), "hm-1", score, label, None).unwrap()
}

#[test]
fn starts_from_defaults() {
    let (_, adapter) = adapter();
    let w = adapter.current();
    assert_eq!(w.similarity_weight, 0.6);
    assert_eq!(w.screening_weight, 0.4);
    assert_eq!(w.confidence, 0.5);
}

#[test]
fn no_pass_below_threshold() {
    let (engine, adapter) = adapter();
    for i in 0..4 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    assert_eq!(engine.history_count().unwrap(), 0);
    assert_eq!(adapter.current().similarity_weight, 0.6);
}

#[test]
fn fifth_false_positive_shifts_weight_to_screening() {
    let (engine, adapter) = adapter();
    for i in 0..5 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    let w = adapter.current();
    assert!((w.similarity_weight - 0.55).abs() < 1e-9);
    assert!((w.screening_weight - 0.45).abs() < 1e-9);

    let history = engine.recent_history(10).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(
        history[0].trigger_action,
        "Reduce similarity weight (false positives detected)"
    );
    assert_eq!(history[0].feedback_count, 5);
}

#[test]
fn maybe_adjust_reports_whether_a_rule_fired() {
    let (engine, adapter) = adapter();
    for i in 0..4 {
        engine.record(&verdict(i, 6.0, "Good Fit")).unwrap();
    }
    assert!(adapter.maybe_adjust().unwrap().is_none());

    // Mid-range hires match no rule; the pass is still recorded.
    engine.record(&verdict(4, 6.0, "Good Fit")).unwrap();
    let quiet = adapter.maybe_adjust().unwrap().unwrap();
    assert!(!quiet.rule_fired());
    assert_eq!(quiet.trigger_action, "");
    assert_eq!(quiet.window_size, 5);
    assert_eq!(quiet.weights.similarity_weight, 0.6);

    for i in 5..15 {
        engine.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    let fired = adapter.maybe_adjust().unwrap().unwrap();
    assert!(fired.rule_fired());
    assert!(fired.weights.similarity_weight < 0.6);
    assert_eq!(engine.history_count().unwrap(), 2);
}

#[test]
fn every_event_past_threshold_runs_a_pass() {
    let (engine, adapter) = adapter();
    for i in 0..8 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    assert_eq!(engine.history_count().unwrap(), 4);
    assert!((adapter.current().similarity_weight - 0.4).abs() < 1e-9);
}

#[test]
fn similarity_weight_bottoms_out_at_minimum() {
    let (_, adapter) = adapter();
    for i in 0..30 {
        adapter.record(&verdict(i, 9.5, "Not a Fit")).unwrap();
    }
    let w = adapter.current();
    assert!((w.similarity_weight - 0.3).abs() < 1e-9);
    assert!((w.screening_weight - 0.7).abs() < 1e-9);
}

#[test]
fn window_only_covers_the_most_recent_entries() {
    let (engine, adapter) = adapter();
    // Ten strong hires, then ten rejections of high scorers push them out of the window.
    for i in 0..10 {
        adapter.record(&verdict(i, 9.0, "Good Fit")).unwrap();
    }
    for i in 10..20 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    let latest = engine.latest_history().unwrap().unwrap();
    assert_eq!(latest.feedback_count, 10);
    assert_eq!(
        latest.trigger_action,
        "Reduce similarity weight (false positives detected)"
    );
}

#[test]
fn confidence_is_capped() {
    let (_, adapter) = adapter();
    for i in 0..20 {
        adapter.record(&verdict(i, 9.0, "Good Fit")).unwrap();
    }
    assert!((adapter.current().confidence - 0.95).abs() < 1e-9);
}

#[test]
fn reset_restores_defaults_and_records_total() {
    let (engine, adapter) = adapter();
    for i in 0..7 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    let reset = adapter.reset().unwrap();
    assert_eq!(reset.similarity_weight, 0.6);
    assert_eq!(adapter.current().screening_weight, 0.4);
    assert_eq!(adapter.current().confidence, 0.5);

    let latest = engine.latest_history().unwrap().unwrap();
    assert_eq!(latest.trigger_action, "Manual reset to defaults");
    assert_eq!(latest.feedback_count, 7);
}

#[test]
fn restore_seeds_from_latest_history() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    {
        let first = WeightAdapter::new(engine.clone(), engine.clone(), LearningConfig::default());
        for i in 0..6 {
            first.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
        }
    }
    let restored =
        WeightAdapter::restore(engine.clone(), engine.clone(), LearningConfig::default()).unwrap();
    assert!((restored.current().similarity_weight - 0.5).abs() < 1e-9);

    let fresh = WeightAdapter::new(engine.clone(), engine.clone(), LearningConfig::default());
    assert_eq!(fresh.current().similarity_weight, 0.6);
}

#[test]
fn custom_learning_rate_scales_steps() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let config = LearningConfig {
        learning_rate: 0.1,
        adjustment_threshold: 1,
        ..LearningConfig::default()
    };
    let adapter = WeightAdapter::new(engine.clone(), engine.clone(), config);
    adapter.record(&verdict(0, 9.0, "Not a Fit")).unwrap();
    assert!((adapter.current().similarity_weight - 0.5).abs() < 1e-9);
}

/// Feedback log that accepts writes but fails every read.
struct UnreadableFeedback {
    writes: AtomicUsize,
}

impl IFeedbackStorage for UnreadableFeedback {
    fn record(&self, _entry: &NewFeedback) -> TalentResult<i64> {
        Ok(self.writes.fetch_add(1, Ordering::SeqCst) as i64 + 1)
    }
    fn count(&self) -> TalentResult<usize> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".into(),
        }
        .into())
    }
    fn recent(&self, _limit: usize) -> TalentResult<Vec<FeedbackEntry>> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".into(),
        }
        .into())
    }
    fn all(&self) -> TalentResult<Vec<FeedbackEntry>> {
        self.recent(0)
    }
    fn label_statistics(&self) -> TalentResult<Vec<LabelStatistics>> {
        Ok(Vec::new())
    }
}

/// History sink whose appends always fail.
struct BrokenHistory;

impl IWeightHistoryStorage for BrokenHistory {
    fn append(&self, _record: &NewWeightHistory) -> TalentResult<i64> {
        Err(StorageError::SqliteError {
            message: "database is locked".into(),
        }
        .into())
    }
    fn recent_history(&self, _limit: usize) -> TalentResult<Vec<WeightHistoryRecord>> {
        Ok(Vec::new())
    }
    fn latest_history(&self) -> TalentResult<Option<WeightHistoryRecord>> {
        Ok(None)
    }
    fn history_count(&self) -> TalentResult<usize> {
        Ok(0)
    }
}

#[test]
fn failed_pass_does_not_fail_the_write() {
    let feedback = Arc::new(UnreadableFeedback {
        writes: AtomicUsize::new(0),
    });
    let adapter = WeightAdapter::new(feedback.clone(), Arc::new(BrokenHistory), LearningConfig::default());
    for i in 0..6 {
        assert!(adapter.record(&verdict(i, 9.0, "Not a Fit")).is_ok());
    }
    assert_eq!(feedback.writes.load(Ordering::SeqCst), 6);
    assert_eq!(adapter.current().similarity_weight, 0.6);
}

#[test]
fn failed_history_append_leaves_weights_untouched() {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let adapter = WeightAdapter::new(engine.clone(), Arc::new(BrokenHistory), LearningConfig::default());
    for i in 0..5 {
        adapter.record(&verdict(i, 9.0, "Not a Fit")).unwrap();
    }
    assert_eq!(engine.count().unwrap(), 5);
    assert_eq!(adapter.current().similarity_weight, 0.6);
    assert!(adapter.run_adjustment_pass().is_err());
    assert!(adapter.reset().is_err());
}
