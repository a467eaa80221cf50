use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight adaptation configuration. Defaults give the 0.6/0.4 starting point and the standard rule steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Base step applied by the adjustment rules.
    pub learning_rate: f64,
    /// Total feedback count at which adjustment passes start running.
    pub adjustment_threshold: usize,
    /// Number of most recent feedback entries examined per pass.
    pub feedback_window: usize,
    pub default_similarity_weight: f64,
    pub default_screening_weight: f64,
    pub default_confidence: f64,
    /// Ceiling for confidence increases.
    pub max_confidence: f64,
    pub similarity_weight_min: f64,
    pub similarity_weight_max: f64,
    pub screening_weight_min: f64,
    pub screening_weight_max: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            adjustment_threshold: defaults::DEFAULT_ADJUSTMENT_THRESHOLD,
            feedback_window: defaults::DEFAULT_FEEDBACK_WINDOW,
            default_similarity_weight: defaults::DEFAULT_SIMILARITY_WEIGHT,
            default_screening_weight: defaults::DEFAULT_SCREENING_WEIGHT,
            default_confidence: defaults::DEFAULT_CONFIDENCE,
            max_confidence: defaults::DEFAULT_MAX_CONFIDENCE,
            similarity_weight_min: defaults::DEFAULT_SIMILARITY_WEIGHT_MIN,
            similarity_weight_max: defaults::DEFAULT_SIMILARITY_WEIGHT_MAX,
            screening_weight_min: defaults::DEFAULT_SCREENING_WEIGHT_MIN,
            screening_weight_max: defaults::DEFAULT_SCREENING_WEIGHT_MAX,
        }
    }
}
