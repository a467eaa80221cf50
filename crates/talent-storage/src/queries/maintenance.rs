//! Checkpoint and integrity check.

use rusqlite::Connection;

use talent_core::errors::TalentResult;

use crate::to_storage_err;

/// WAL checkpoint.
pub fn wal_checkpoint(conn: &Connection) -> TalentResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Run integrity check. Returns true if database is OK.
pub fn integrity_check(conn: &Connection) -> TalentResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}
