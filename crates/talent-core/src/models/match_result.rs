use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Recommendation;
use crate::constants::FAILED_MATCH_SCORE;

/// Outcome of one candidate/job match computation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    pub candidate_id: String,
    pub job_id: String,
    /// Rescaled cosine similarity in [0, 1], rounded to 3 decimals.
    pub similarity_score: f64,
    /// Screening score in [0, 10] as supplied.
    pub screening_score: f64,
    /// Weighted blend on the 0–10 scale, rounded to 2 decimals.
    pub final_score: f64,
    pub recommendation: Recommendation,
    pub explanation: String,
}

/// Sentinel entry standing in for a batch candidate that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchFailure {
    pub candidate_id: String,
    pub error: String,
    pub final_score: f64,
}

impl MatchFailure {
    pub fn new(candidate_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            error: error.into(),
            final_score: FAILED_MATCH_SCORE,
        }
    }
}

/// One entry of a batch ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "lowercase")]
#[ts(export)]
pub enum MatchOutcome {
    Scored(MatchResult),
    Failed(MatchFailure),
}

impl MatchOutcome {
    pub fn final_score(&self) -> f64 {
        match self {
            Self::Scored(result) => result.final_score,
            Self::Failed(failure) => failure.final_score,
        }
    }

    pub fn candidate_id(&self) -> &str {
        match self {
            Self::Scored(result) => &result.candidate_id,
            Self::Failed(failure) => &failure.candidate_id,
        }
    }

    pub fn as_result(&self) -> Option<&MatchResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
