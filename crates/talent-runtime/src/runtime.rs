//! TalentRuntime: owns the storage engine and every component built on it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use talent_analytics::AnalyticsAggregator;
use talent_core::config::TalentConfig;
use talent_core::constants::DEFAULT_HISTORY_LIMIT;
use talent_core::errors::{TalentError, TalentResult};
use talent_core::models::{
    FeedbackAnalytics, FeedbackEntry, MatchOutcome, MatchResult, MatchStatistics, NewFeedback,
    WeightHistoryRecord, WeightParameters, WeightsSnapshot,
};
use talent_core::traits::IFeedbackStorage;
use talent_learning::WeightAdapter;
use talent_matching::{BatchCandidate, MatchingEngine};
use talent_storage::StorageEngine;

/// Options for building a runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Path to the SQLite database. If None, uses in-memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Seed the weights from the latest history record instead of defaults.
    pub restore_weights: bool,
}

pub struct TalentRuntime {
    storage: Arc<StorageEngine>,
    matching: MatchingEngine,
    adapter: WeightAdapter,
    analytics: AnalyticsAggregator,
    config: TalentConfig,
}

impl TalentRuntime {
    pub fn new(opts: RuntimeOptions) -> TalentResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => TalentConfig::from_toml(toml_str)
                .map_err(|e| TalentError::ConfigError(e.to_string()))?,
            None => TalentConfig::default(),
        };

        let storage = match &opts.db_path {
            Some(path) => StorageEngine::open_with_config(path, &config.storage)?,
            None => StorageEngine::open_in_memory()?,
        };
        Self::assemble(storage, config, opts.restore_weights)
    }

    /// Deployment entry point: install the configured tracing subscriber
    /// (unless one is already set) and open `config.storage.db_path`.
    /// Callers apply environment overrides to the config beforehand.
    pub fn from_config(config: TalentConfig) -> TalentResult<Self> {
        if !talent_observability::init_tracing_from_config(&config.observability) {
            tracing::debug!("tracing subscriber already installed");
        }
        let storage =
            StorageEngine::open_with_config(Path::new(&config.storage.db_path), &config.storage)?;
        Self::assemble(storage, config, false)
    }

    fn assemble(storage: StorageEngine, config: TalentConfig, restore: bool) -> TalentResult<Self> {
        let storage = Arc::new(storage);
        let adapter = if restore {
            WeightAdapter::restore(storage.clone(), storage.clone(), config.learning.clone())?
        } else {
            WeightAdapter::new(storage.clone(), storage.clone(), config.learning.clone())
        };
        let analytics = AnalyticsAggregator::new(storage.clone(), storage.clone());
        let matching = MatchingEngine::new(config.matching.clone());

        info!(
            schema_version = storage.schema_version()?,
            similarity_weight = adapter.current().similarity_weight,
            "talent runtime ready"
        );
        Ok(Self {
            storage,
            matching,
            adapter,
            analytics,
            config,
        })
    }

    pub fn config(&self) -> &TalentConfig {
        &self.config
    }

    pub fn storage(&self) -> &StorageEngine {
        &self.storage
    }

    /// Score one candidate against one job with the current weights.
    pub fn compute_match(
        &self,
        job_embedding: &[f32],
        candidate_embedding: &[f32],
        screening_score: f64,
        candidate_ref: Option<&str>,
        job_ref: Option<&str>,
    ) -> TalentResult<MatchResult> {
        self.matching.compute_match(
            job_embedding,
            candidate_embedding,
            screening_score,
            &self.adapter.current(),
            candidate_ref.unwrap_or_default(),
            job_ref.unwrap_or_default(),
        )
    }

    /// Score and rank many candidates for one job. Candidates that fail carry
    /// a final score of -1 and sort last.
    pub fn match_batch(
        &self,
        job_embedding: &[f32],
        candidates: &[BatchCandidate],
        job_ref: Option<&str>,
    ) -> Vec<MatchOutcome> {
        self.matching.match_batch(
            job_embedding,
            candidates,
            &self.adapter.current(),
            job_ref.unwrap_or_default(),
        )
    }

    pub fn top_matches(&self, outcomes: &[MatchOutcome], k: Option<usize>) -> Vec<MatchOutcome> {
        self.matching.top_matches(outcomes, k)
    }

    pub fn filter_by_threshold(&self, outcomes: &[MatchOutcome], min_score: Option<f64>) -> Vec<MatchOutcome> {
        self.matching.filter_by_threshold(outcomes, min_score)
    }

    pub fn match_statistics(&self, outcomes: &[MatchOutcome]) -> MatchStatistics {
        self.matching.statistics(outcomes)
    }

    /// Validate and persist a hiring-manager verdict, then run the weight
    /// adjustment pass if due. Returns the new feedback id.
    pub fn record_feedback(
        &self,
        candidate_id: &str,
        hiring_manager_id: &str,
        final_score: f64,
        feedback: &str,
        notes: Option<String>,
    ) -> TalentResult<i64> {
        let entry = NewFeedback::parse(candidate_id, hiring_manager_id, final_score, feedback, notes)?;
        self.adapter.record(&entry)
    }

    /// Rounded weights with the live feedback total.
    pub fn get_weights(&self) -> WeightsSnapshot {
        self.analytics.weights_snapshot(&self.adapter.current())
    }

    /// Unrounded live weights.
    pub fn current_weights(&self) -> WeightParameters {
        self.adapter.current()
    }

    /// Most recent history records first; `None` returns up to 20.
    pub fn get_weight_history(&self, limit: Option<usize>) -> Vec<WeightHistoryRecord> {
        self.analytics
            .weight_history(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
    }

    pub fn get_feedback_analytics(&self) -> FeedbackAnalytics {
        self.analytics.feedback_analytics(&self.adapter.current())
    }

    pub fn reset_weights(&self) -> TalentResult<WeightParameters> {
        self.adapter.reset()
    }

    /// Every feedback entry, most recent first.
    pub fn export_feedback(&self) -> TalentResult<Vec<FeedbackEntry>> {
        self.storage.all()
    }
}
