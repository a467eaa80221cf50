//! Single write connection behind a mutex. Serialized writes, no contention.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use talent_core::config::defaults::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_WAL_MODE};
use talent_core::config::StorageConfig;
use talent_core::errors::{StorageError, TalentResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, config: &StorageConfig) -> TalentResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config.busy_timeout_ms, config.wal_mode)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> TalentResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_WAL_MODE)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> TalentResult<T>
    where
        F: FnOnce(&Connection) -> TalentResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("writer: {e}"),
        })?;
        f(&guard)
    }
}
