//! WeightAdapter: records feedback and, once enough has accumulated, nudges
//! the blend weights after every new entry.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use talent_core::config::LearningConfig;
use talent_core::constants::MANUAL_RESET_TRIGGER;
use talent_core::errors::TalentResult;
use talent_core::models::{NewFeedback, NewWeightHistory, WeightParameters};
use talent_core::traits::{IFeedbackStorage, IWeightHistoryStorage};
use talent_observability::tracing_setup::events;

use crate::rules::{self, AdjustmentRule};
use crate::window::FeedbackWindow;

/// Result of one adjustment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentOutcome {
    pub weights: WeightParameters,
    /// Trigger recorded in history; empty when no rule fired.
    pub trigger_action: String,
    /// Entries examined.
    pub window_size: usize,
    pub history_id: i64,
}

impl AdjustmentOutcome {
    pub fn rule_fired(&self) -> bool {
        !self.trigger_action.is_empty()
    }
}

/// Owns the live weights. The mutex serializes adjustment passes and resets
/// so each history record reflects exactly one state transition.
pub struct WeightAdapter {
    feedback: Arc<dyn IFeedbackStorage>,
    history: Arc<dyn IWeightHistoryStorage>,
    config: LearningConfig,
    weights: Mutex<WeightParameters>,
}

impl WeightAdapter {
    /// Start from the configured default weights.
    pub fn new(
        feedback: Arc<dyn IFeedbackStorage>,
        history: Arc<dyn IWeightHistoryStorage>,
        config: LearningConfig,
    ) -> Self {
        let weights = default_weights(&config);
        Self {
            feedback,
            history,
            config,
            weights: Mutex::new(weights),
        }
    }

    /// Start from the latest history record, falling back to defaults when
    /// no history exists yet.
    pub fn restore(
        feedback: Arc<dyn IFeedbackStorage>,
        history: Arc<dyn IWeightHistoryStorage>,
        config: LearningConfig,
    ) -> TalentResult<Self> {
        let latest = history.latest_history()?;
        let adapter = Self::new(feedback, history, config);
        if let Some(record) = latest {
            debug!(history_id = record.id, "weights restored from history");
            *adapter.lock() = record.to_weights();
        }
        Ok(adapter)
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// Snapshot of the live weights.
    pub fn current(&self) -> WeightParameters {
        *self.lock()
    }

    /// Persist one feedback entry, then run an adjustment pass if the total
    /// count has reached the threshold. A failed pass is logged and never
    /// undoes or fails the write.
    pub fn record(&self, entry: &NewFeedback) -> TalentResult<i64> {
        let _span = talent_observability::feedback_span!(entry.candidate_id, entry.feedback).entered();
        let id = self.feedback.record(entry)?;
        events::feedback_recorded(id, &entry.candidate_id, entry.feedback.as_str());

        if let Err(e) = self.maybe_adjust() {
            events::adjustment_failed(&e.to_string());
        }
        Ok(id)
    }

    /// Run a pass only when the feedback total is at or above the threshold.
    pub fn maybe_adjust(&self) -> TalentResult<Option<AdjustmentOutcome>> {
        let total = self.feedback.count()?;
        if total < self.config.adjustment_threshold {
            debug!(total, threshold = self.config.adjustment_threshold, "below adjustment threshold");
            return Ok(None);
        }
        self.run_adjustment_pass().map(Some)
    }

    /// Evaluate the rule table over the most recent window and record the
    /// result in history, whether or not a rule fired.
    pub fn run_adjustment_pass(&self) -> TalentResult<AdjustmentOutcome> {
        let recent = self.feedback.recent(self.config.feedback_window)?;
        let window = FeedbackWindow::from_entries(&recent);
        let _span = talent_observability::adjustment_span!(window.len()).entered();

        let mut guard = self.lock();
        let rule = rules::find_applicable_rule(&window);
        let next = match &rule {
            Some(rule) => self.apply_rule(&guard, rule),
            None => WeightParameters {
                adjusted_at: Utc::now(),
                ..*guard
            },
        };
        let trigger_action = rule.as_ref().map(|r| r.trigger_action).unwrap_or_default();

        let history_id = self.history.append(&NewWeightHistory::from_weights(
            &next,
            trigger_action,
            window.len(),
        ))?;
        *guard = next;
        drop(guard);

        events::weights_adjusted(
            trigger_action,
            next.similarity_weight,
            next.screening_weight,
            next.confidence,
            window.len(),
        );
        Ok(AdjustmentOutcome {
            weights: next,
            trigger_action: trigger_action.to_string(),
            window_size: window.len(),
            history_id,
        })
    }

    /// Restore default weights and confidence, recording the reset along
    /// with the total feedback count.
    pub fn reset(&self) -> TalentResult<WeightParameters> {
        let total = self.feedback.count()?;
        let defaults = default_weights(&self.config);

        let mut guard = self.lock();
        self.history.append(&NewWeightHistory::from_weights(
            &defaults,
            MANUAL_RESET_TRIGGER,
            total,
        ))?;
        *guard = defaults;
        drop(guard);

        events::weights_reset(total);
        info!(feedback_count = total, "weights reset");
        Ok(defaults)
    }

    fn apply_rule(&self, current: &WeightParameters, rule: &AdjustmentRule) -> WeightParameters {
        let lr = self.config.learning_rate;
        let mut next = WeightParameters {
            adjusted_at: Utc::now(),
            ..*current
        };
        if rule.moves_weights() {
            let similarity = (current.similarity_weight + rule.similarity_factor * lr)
                .clamp(self.config.similarity_weight_min, self.config.similarity_weight_max);
            let screening = (current.screening_weight + rule.screening_factor * lr)
                .clamp(self.config.screening_weight_min, self.config.screening_weight_max);
            let total = similarity + screening;
            next.similarity_weight = similarity / total;
            next.screening_weight = screening / total;
        }
        if rule.confidence_delta != 0.0 {
            next.confidence = (current.confidence + rule.confidence_delta).min(self.config.max_confidence);
        }
        next
    }

    /// The guarded value is a `Copy` struct replaced whole, so a poisoned
    /// lock still holds a consistent state.
    fn lock(&self) -> MutexGuard<'_, WeightParameters> {
        self.weights
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn default_weights(config: &LearningConfig) -> WeightParameters {
    WeightParameters::new(
        config.default_similarity_weight,
        config.default_screening_weight,
        config.default_confidence,
    )
}
