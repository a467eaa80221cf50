use crate::errors::TalentResult;
use crate::models::{
    FeedbackEntry, LabelStatistics, NewFeedback, NewWeightHistory, WeightHistoryRecord,
};

/// Append-only feedback log. Reads always reflect the last committed write.
pub trait IFeedbackStorage: Send + Sync {
    /// Persist one entry and return its id.
    fn record(&self, entry: &NewFeedback) -> TalentResult<i64>;

    fn count(&self) -> TalentResult<usize>;

    /// Up to `limit` entries, most recent first.
    fn recent(&self, limit: usize) -> TalentResult<Vec<FeedbackEntry>>;

    /// Every entry, most recent first.
    fn all(&self) -> TalentResult<Vec<FeedbackEntry>>;

    /// Count and unrounded mean final score per label present in the log.
    fn label_statistics(&self) -> TalentResult<Vec<LabelStatistics>>;
}

/// Append-only audit trail of weight adjustments and resets.
pub trait IWeightHistoryStorage: Send + Sync {
    fn append(&self, record: &NewWeightHistory) -> TalentResult<i64>;

    /// Up to `limit` records, most recent first.
    fn recent_history(&self, limit: usize) -> TalentResult<Vec<WeightHistoryRecord>>;

    fn latest_history(&self) -> TalentResult<Option<WeightHistoryRecord>>;

    fn history_count(&self) -> TalentResult<usize>;
}
