//! Schema migrations using PRAGMA user_version.

pub mod v001_feedback;
pub mod v002_weight_history;

use rusqlite::Connection;

use talent_core::errors::{StorageError, TalentResult};

type MigrationFn = fn(&Connection) -> TalentResult<()>;

/// Ordered migration table.
const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_feedback::migrate),
    (2, v002_weight_history::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> TalentResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if current < *version {
            migrate(conn).map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> TalentResult<u32> {
    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
