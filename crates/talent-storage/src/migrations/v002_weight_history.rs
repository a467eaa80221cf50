//! v002: weight adjustment audit trail.

use rusqlite::Connection;

use talent_core::errors::TalentResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TalentResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS weight_history (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            similarity_weight REAL NOT NULL,
            screening_weight  REAL NOT NULL,
            confidence        REAL NOT NULL,
            trigger_action    TEXT NOT NULL DEFAULT '',
            feedback_count    INTEGER NOT NULL DEFAULT 0,
            created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_weight_history_created ON weight_history(created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
