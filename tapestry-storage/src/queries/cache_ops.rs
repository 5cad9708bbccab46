//! CRUD for the cached_content table. Scoring and eviction policy live in
//! tapestry-cache; this module only moves rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use tapestry_core::errors::TapestryResult;
use tapestry_core::model::CachedContent;

use crate::{fmt_ts, to_storage_err};

fn parse_ts(s: &str) -> TapestryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {s}: {e}")))
}

/// Look up an entry by key. No staleness logic here; the cache engine
/// decides whether a returned entry counts as present.
pub fn get_entry(conn: &Connection, key: &str) -> TapestryResult<Option<CachedContent>> {
    let raw = conn
        .query_row(
            "SELECT key, locator, content, fetched_at, last_accessed, access_count
             FROM cached_content WHERE key = ?1",
            params![key],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(|(key, locator, content, fetched_at, last_accessed, access_count)| {
        Ok(CachedContent {
            key,
            locator,
            content,
            fetched_at: parse_ts(&fetched_at)?,
            last_accessed: parse_ts(&last_accessed)?,
            access_count: access_count.max(0) as u64,
        })
    })
    .transpose()
}

/// Record a cache hit: bump access_count, refresh last_accessed.
pub fn touch_entry(conn: &Connection, key: &str, now: DateTime<Utc>) -> TapestryResult<()> {
    conn.execute(
        "UPDATE cached_content
         SET access_count = access_count + 1, last_accessed = ?1
         WHERE key = ?2",
        params![fmt_ts(now), key],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Insert a freshly fetched entry, replacing any stale row under the same
/// key.
pub fn insert_entry(conn: &Connection, entry: &CachedContent) -> TapestryResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO cached_content (
            key, locator, content, fetched_at, last_accessed, access_count
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.key,
            entry.locator,
            entry.content,
            fmt_ts(entry.fetched_at),
            fmt_ts(entry.last_accessed),
            entry.access_count as i64,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn entry_count(conn: &Connection) -> TapestryResult<usize> {
    conn.query_row("SELECT COUNT(*) FROM cached_content", [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Metadata needed to score an entry for eviction.
pub struct EvictionCandidate {
    pub key: String,
    pub access_count: u64,
    pub last_accessed: DateTime<Utc>,
}

pub fn eviction_candidates(conn: &Connection) -> TapestryResult<Vec<EvictionCandidate>> {
    let mut stmt = conn
        .prepare("SELECT key, access_count, last_accessed FROM cached_content")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (key, access_count, last_accessed) = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(EvictionCandidate {
            key,
            access_count: access_count.max(0) as u64,
            last_accessed: parse_ts(&last_accessed)?,
        });
    }
    Ok(out)
}

pub fn delete_entries(conn: &Connection, keys: &[String]) -> TapestryResult<usize> {
    let mut deleted = 0;
    for key in keys {
        deleted += conn
            .execute("DELETE FROM cached_content WHERE key = ?1", params![key])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(deleted)
}
