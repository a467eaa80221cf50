//! Layered configuration: TOML file, then environment overrides.

pub mod defaults;
mod learning_config;
mod matching_config;
mod observability_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use learning_config::LearningConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{TalentError, TalentResult};

/// Root configuration for the Talent matching system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TalentConfig {
    pub storage: StorageConfig,
    pub matching: MatchingConfig,
    pub learning: LearningConfig,
    pub observability: ObservabilityConfig,
}

impl TalentConfig {
    /// Parse configuration from a TOML string. Missing sections and keys
    /// fall back to their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> TalentResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TalentError::ConfigError(format!("{}: {e}", path.display())))?;
        let mut config =
            Self::from_toml(&raw).map_err(|e| TalentError::ConfigError(e.to_string()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `FEEDBACK_DB_PATH` and `LOG_LEVEL` when present.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (environment in production,
    /// a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(defaults::ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            self.storage.db_path = path;
        }
        if let Some(level) = lookup(defaults::ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.observability.log_level = level.to_lowercase();
        }
    }
}
