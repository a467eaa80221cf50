//! Query modules, one per table, plus maintenance.

pub mod feedback_ops;
pub mod maintenance;
pub mod weight_history_ops;

use chrono::{DateTime, SecondsFormat, Utc};

use talent_core::errors::{StorageError, TalentResult};

/// Timestamps are stored as RFC 3339 with millisecond precision so that
/// lexical order equals chronological order.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> TalentResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::CorruptionDetected {
                details: format!("bad timestamp '{raw}': {e}"),
            }
            .into()
        })
}
