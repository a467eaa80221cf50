//! MatchingEngine: the entry point for single and batch matching under a
//! deployment's `MatchingConfig`.

use talent_core::config::MatchingConfig;
use talent_core::errors::TalentResult;
use talent_core::models::{MatchFailure, MatchOutcome, MatchResult, MatchStatistics, WeightParameters};
use talent_observability::tracing_setup::events;

use crate::batch::{self, BatchCandidate};
use crate::{combiner, similarity};

/// Stateless apart from its configuration; weights are supplied per call so
/// callers always score with the adapter's current snapshot.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Similarity of two embeddings in [0, 1], honoring the configured
    /// dimensionality.
    pub fn similarity(&self, job_embedding: &[f32], candidate_embedding: &[f32]) -> TalentResult<f64> {
        similarity::validate_pair(
            job_embedding,
            candidate_embedding,
            self.config.embedding_dimensions,
        )?;
        Ok(similarity::rescale(similarity::cosine_similarity(
            job_embedding,
            candidate_embedding,
        )))
    }

    /// Score one candidate against one job. All inputs are validated before
    /// any numeric work.
    pub fn compute_match(
        &self,
        job_embedding: &[f32],
        candidate_embedding: &[f32],
        screening_score: f64,
        weights: &WeightParameters,
        candidate_id: &str,
        job_id: &str,
    ) -> TalentResult<MatchResult> {
        let _span = talent_observability::matching_span!(candidate_id, job_id).entered();
        combiner::validate_screening(screening_score)?;
        let similarity = self.similarity(job_embedding, candidate_embedding)?;
        let result = combiner::compute_match(similarity, screening_score, weights, candidate_id, job_id)?;
        tracing::debug!(
            final_score = result.final_score,
            recommendation = result.recommendation.label(),
            "match computed"
        );
        Ok(result)
    }

    /// Score every candidate, substitute a sentinel for any that fail, and
    /// return the list sorted by final score, best first. One bad candidate
    /// never aborts the batch.
    pub fn match_batch(
        &self,
        job_embedding: &[f32],
        candidates: &[BatchCandidate],
        weights: &WeightParameters,
        job_id: &str,
    ) -> Vec<MatchOutcome> {
        let _span = talent_observability::batch_span!(candidates.len()).entered();
        let mut outcomes: Vec<MatchOutcome> = candidates
            .iter()
            .map(|candidate| {
                match self.compute_match(
                    job_embedding,
                    candidate.embedding.as_slice(),
                    candidate.screening_or_default(),
                    weights,
                    &candidate.candidate_id,
                    job_id,
                ) {
                    Ok(result) => MatchOutcome::Scored(result),
                    Err(e) => {
                        let message = e.to_string();
                        events::batch_item_failed(&candidate.candidate_id, &message);
                        MatchOutcome::Failed(MatchFailure::new(&candidate.candidate_id, message))
                    }
                }
            })
            .collect();
        batch::rank(&mut outcomes);
        outcomes
    }

    /// Top-K selection; `None` uses `default_top_k`.
    pub fn top_matches(&self, outcomes: &[MatchOutcome], k: Option<usize>) -> Vec<MatchOutcome> {
        batch::top_k(outcomes, k.unwrap_or(self.config.default_top_k))
    }

    /// Threshold filter; `None` uses `default_min_score`.
    pub fn filter_by_threshold(&self, outcomes: &[MatchOutcome], min_score: Option<f64>) -> Vec<MatchOutcome> {
        batch::filter_by_threshold(outcomes, min_score.unwrap_or(self.config.default_min_score))
    }

    pub fn statistics(&self, outcomes: &[MatchOutcome]) -> MatchStatistics {
        batch::statistics(outcomes)
    }
}
