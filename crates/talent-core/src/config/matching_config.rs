use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Deployment-wide embedding dimensionality. When set, both embeddings
    /// of a match must have exactly this length.
    pub embedding_dimensions: Option<usize>,
    /// Number of results kept by top-K selection when the caller gives none.
    pub default_top_k: usize,
    /// Minimum final score kept by the threshold filter when the caller gives none.
    pub default_min_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            embedding_dimensions: None,
            default_top_k: defaults::DEFAULT_TOP_K,
            default_min_score: defaults::DEFAULT_MIN_SCORE,
        }
    }
}
