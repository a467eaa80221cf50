use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::WeightParameters;

/// One audit entry per adjustment pass or reset. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightHistoryRecord {
    pub id: i64,
    pub similarity_weight: f64,
    pub screening_weight: f64,
    pub confidence: f64,
    /// Which rule fired; empty when no rule matched.
    pub trigger_action: String,
    /// Size of the feedback window examined (total count for resets).
    pub feedback_count: usize,
    pub created_at: DateTime<Utc>,
}

impl WeightHistoryRecord {
    /// Rebuild the weight state this record captured.
    pub fn to_weights(&self) -> WeightParameters {
        WeightParameters {
            similarity_weight: self.similarity_weight,
            screening_weight: self.screening_weight,
            confidence: self.confidence,
            adjusted_at: self.created_at,
        }
    }
}

/// History entry waiting to be appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWeightHistory {
    pub similarity_weight: f64,
    pub screening_weight: f64,
    pub confidence: f64,
    pub trigger_action: String,
    pub feedback_count: usize,
}

impl NewWeightHistory {
    pub fn from_weights(
        weights: &WeightParameters,
        trigger_action: impl Into<String>,
        feedback_count: usize,
    ) -> Self {
        Self {
            similarity_weight: weights.similarity_weight,
            screening_weight: weights.screening_weight,
            confidence: weights.confidence,
            trigger_action: trigger_action.into(),
            feedback_count,
        }
    }
}
