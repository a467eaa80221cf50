use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;

/// Blend weights used by the score combiner, plus how reinforced they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightParameters {
    /// Weight of the similarity signal, in [0.3, 0.8].
    pub similarity_weight: f64,
    /// Weight of the screening signal, in [0.2, 0.7].
    pub screening_weight: f64,
    /// How consistently feedback has confirmed these weights, in [0, 0.95].
    pub confidence: f64,
    pub adjusted_at: DateTime<Utc>,
}

impl WeightParameters {
    pub fn new(similarity_weight: f64, screening_weight: f64, confidence: f64) -> Self {
        Self {
            similarity_weight,
            screening_weight,
            confidence,
            adjusted_at: Utc::now(),
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.similarity_weight + self.screening_weight
    }
}

impl Default for WeightParameters {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_SIMILARITY_WEIGHT,
            defaults::DEFAULT_SCREENING_WEIGHT,
            defaults::DEFAULT_CONFIDENCE,
        )
    }
}
