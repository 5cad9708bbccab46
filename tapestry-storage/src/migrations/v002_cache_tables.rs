//! v002: cached_content table, keyed by the locator's content address.

use rusqlite::Connection;

use tapestry_core::errors::TapestryResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TapestryResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS cached_content (
            key           TEXT PRIMARY KEY,
            locator       TEXT NOT NULL,
            content       TEXT NOT NULL,
            fetched_at    TEXT NOT NULL,
            last_accessed TEXT NOT NULL,
            access_count  INTEGER NOT NULL DEFAULT 1
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
