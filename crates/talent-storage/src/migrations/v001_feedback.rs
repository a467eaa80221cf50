//! v001: feedback log.

use rusqlite::Connection;

use talent_core::errors::TalentResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TalentResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS feedback (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            candidate_id      TEXT NOT NULL,
            hiring_manager_id TEXT NOT NULL,
            final_score       REAL NOT NULL,
            feedback          TEXT NOT NULL,
            notes             TEXT,
            created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_created ON feedback(created_at);
        CREATE INDEX IF NOT EXISTS idx_feedback_label ON feedback(feedback);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
