//! Append, count, and ordered reads over the feedback log.

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use talent_core::errors::{StorageError, TalentResult};
use talent_core::models::{FeedbackEntry, FeedbackLabel, LabelStatistics, NewFeedback};

use super::{format_timestamp, parse_timestamp};
use crate::to_storage_err;

const SELECT_COLUMNS: &str =
    "SELECT id, candidate_id, hiring_manager_id, final_score, feedback, notes, created_at FROM feedback";

/// Raw row before label and timestamp parsing.
struct FeedbackRow {
    id: i64,
    candidate_id: String,
    hiring_manager_id: String,
    final_score: f64,
    feedback: String,
    notes: Option<String>,
    created_at: String,
}

impl FeedbackRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            candidate_id: row.get(1)?,
            hiring_manager_id: row.get(2)?,
            final_score: row.get(3)?,
            feedback: row.get(4)?,
            notes: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_entry(self) -> TalentResult<FeedbackEntry> {
        Ok(FeedbackEntry {
            id: self.id,
            candidate_id: self.candidate_id,
            hiring_manager_id: self.hiring_manager_id,
            final_score: self.final_score,
            feedback: parse_label(&self.feedback)?,
            notes: self.notes,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

fn parse_label(raw: &str) -> TalentResult<FeedbackLabel> {
    raw.parse().map_err(|_| {
        StorageError::CorruptionDetected {
            details: format!("unknown feedback label '{raw}' in storage"),
        }
        .into()
    })
}

/// Insert one entry; returns the new row id.
pub fn insert_feedback(conn: &Connection, entry: &NewFeedback) -> TalentResult<i64> {
    conn.execute(
        "INSERT INTO feedback (candidate_id, hiring_manager_id, final_score, feedback, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.candidate_id,
            entry.hiring_manager_id,
            entry.final_score,
            entry.feedback.as_str(),
            entry.notes,
            format_timestamp(Utc::now()),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn count_feedback(conn: &Connection) -> TalentResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Most recent first. `None` returns the whole log.
pub fn recent_feedback(conn: &Connection, limit: Option<usize>) -> TalentResult<Vec<FeedbackEntry>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?1");
    // SQLite treats a negative LIMIT as unbounded.
    let limit = limit.map(|l| l as i64).unwrap_or(-1);

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit], FeedbackRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        entries.push(row.into_entry()?);
    }
    Ok(entries)
}

/// Count and mean final score per label, in label order.
pub fn label_statistics(conn: &Connection) -> TalentResult<Vec<LabelStatistics>> {
    let mut stmt = conn
        .prepare(
            "SELECT feedback, AVG(final_score), COUNT(*)
             FROM feedback
             GROUP BY feedback
             ORDER BY feedback",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let label: String = row.get(0)?;
            let average: f64 = row.get(1)?;
            let count: i64 = row.get(2)?;
            Ok((label, average, count))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut stats = Vec::new();
    for row in rows {
        let (label, average_score, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        stats.push(LabelStatistics {
            feedback: parse_label(&label)?,
            average_score,
            count: count as usize,
        });
    }
    Ok(stats)
}
