//! Versioned schema migrations, applied in order on every open.

mod v001_relation_tables;
mod v002_cache_tables;
mod v003_event_tables;

use rusqlite::Connection;

use tapestry_core::errors::TapestryResult;

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 3;

/// Run all pending migrations on the given connection.
pub fn run_migrations(conn: &Connection) -> TapestryResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    apply(conn, 1, v001_relation_tables::migrate)?;
    apply(conn, 2, v002_cache_tables::migrate)?;
    apply(conn, 3, v003_event_tables::migrate)?;
    Ok(())
}

fn applied_version(conn: &Connection) -> TapestryResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply<F>(conn: &Connection, version: u32, migrate: F) -> TapestryResult<()>
where
    F: Fn(&Connection) -> TapestryResult<()>,
{
    if applied_version(conn)? >= version {
        return Ok(());
    }
    tracing::info!(version, "applying schema migration");
    migrate(conn)?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
