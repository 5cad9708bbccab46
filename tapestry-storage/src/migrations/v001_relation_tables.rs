//! v001: relations table, the persisted concept graph.
//!
//! One row per (subject, predicate, object) triple; uniqueness is the
//! primary key, never caller discipline. Concepts exist only as the
//! endpoints of relations.

use rusqlite::Connection;

use tapestry_core::errors::TapestryResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TapestryResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS relations (
            subject_name     TEXT NOT NULL,
            subject_category TEXT NOT NULL,
            predicate        TEXT NOT NULL,
            object_name      TEXT NOT NULL,
            object_category  TEXT NOT NULL,
            weight           REAL NOT NULL,
            last_accessed    TEXT NOT NULL,
            contexts         TEXT NOT NULL DEFAULT '[]',
            PRIMARY KEY (subject_name, subject_category, predicate, object_name, object_category)
        );

        CREATE INDEX IF NOT EXISTS idx_relations_subject
            ON relations(subject_name, subject_category);
        CREATE INDEX IF NOT EXISTS idx_relations_object
            ON relations(object_name, object_category);
        CREATE INDEX IF NOT EXISTS idx_relations_touched
            ON relations(last_accessed);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
