//! v003: experience_events, the append-only log of raw perceptual events.
//! Payloads are opaque JSON; the engine reads this table but never
//! interprets its contents.

use rusqlite::Connection;

use tapestry_core::errors::TapestryResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TapestryResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS experience_events (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            kind      TEXT NOT NULL,
            payload   TEXT NOT NULL,
            source    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_timestamp
            ON experience_events(timestamp);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
