use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{FEEDBACK_GOOD_FIT, FEEDBACK_NOT_A_FIT};
use crate::errors::{TalentResult, ValidationError};

/// A human's binary verdict on a previously computed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FeedbackLabel {
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Not a Fit")]
    NotAFit,
}

impl FeedbackLabel {
    pub const ALL: [FeedbackLabel; 2] = [FeedbackLabel::GoodFit, FeedbackLabel::NotAFit];

    /// The exact literal accepted on input and written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoodFit => FEEDBACK_GOOD_FIT,
            Self::NotAFit => FEEDBACK_NOT_A_FIT,
        }
    }
}

impl FromStr for FeedbackLabel {
    type Err = ValidationError;

    /// Only the two exact literals are accepted; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FEEDBACK_GOOD_FIT => Ok(Self::GoodFit),
            FEEDBACK_NOT_A_FIT => Ok(Self::NotAFit),
            other => Err(ValidationError::InvalidFeedback {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated feedback waiting to be appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub candidate_id: String,
    pub hiring_manager_id: String,
    pub final_score: f64,
    pub feedback: FeedbackLabel,
    pub notes: Option<String>,
}

impl NewFeedback {
    /// Validate raw caller input. Fails before anything is written when the
    /// label is not one of the two literals or the score is not finite.
    pub fn parse(
        candidate_id: impl Into<String>,
        hiring_manager_id: impl Into<String>,
        final_score: f64,
        feedback: &str,
        notes: Option<String>,
    ) -> TalentResult<Self> {
        let feedback: FeedbackLabel = feedback.parse()?;
        if !final_score.is_finite() {
            return Err(ValidationError::NonFiniteScore {
                field: "final_score".to_string(),
            }
            .into());
        }
        Ok(Self {
            candidate_id: candidate_id.into(),
            hiring_manager_id: hiring_manager_id.into(),
            final_score,
            feedback,
            notes,
        })
    }
}

/// A persisted feedback event. Append-only: never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackEntry {
    pub id: i64,
    pub candidate_id: String,
    pub hiring_manager_id: String,
    pub final_score: f64,
    pub feedback: FeedbackLabel,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
