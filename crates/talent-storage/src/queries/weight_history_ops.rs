//! Append and ordered reads over the weight history trail.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use talent_core::errors::TalentResult;
use talent_core::models::{NewWeightHistory, WeightHistoryRecord};

use super::{format_timestamp, parse_timestamp};
use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT id, similarity_weight, screening_weight, confidence, \
     trigger_action, feedback_count, created_at FROM weight_history";

/// Raw row before timestamp parsing.
struct HistoryRow {
    id: i64,
    similarity_weight: f64,
    screening_weight: f64,
    confidence: f64,
    trigger_action: String,
    feedback_count: i64,
    created_at: String,
}

impl HistoryRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            similarity_weight: row.get(1)?,
            screening_weight: row.get(2)?,
            confidence: row.get(3)?,
            trigger_action: row.get(4)?,
            feedback_count: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_record(self) -> TalentResult<WeightHistoryRecord> {
        Ok(WeightHistoryRecord {
            id: self.id,
            similarity_weight: self.similarity_weight,
            screening_weight: self.screening_weight,
            confidence: self.confidence,
            trigger_action: self.trigger_action,
            feedback_count: self.feedback_count.max(0) as usize,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

pub fn insert_record(conn: &Connection, record: &NewWeightHistory) -> TalentResult<i64> {
    conn.execute(
        "INSERT INTO weight_history
            (similarity_weight, screening_weight, confidence, trigger_action, feedback_count, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.similarity_weight,
            record.screening_weight,
            record.confidence,
            record.trigger_action,
            record.feedback_count as i64,
            format_timestamp(Utc::now()),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Most recent first.
pub fn recent_records(conn: &Connection, limit: usize) -> TalentResult<Vec<WeightHistoryRecord>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?1");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit as i64], HistoryRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        records.push(row.into_record()?);
    }
    Ok(records)
}

pub fn latest_record(conn: &Connection) -> TalentResult<Option<WeightHistoryRecord>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT 1");
    let row = conn
        .query_row(&sql, [], HistoryRow::from_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(HistoryRow::into_record).transpose()
}

pub fn count_records(conn: &Connection) -> TalentResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM weight_history", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
