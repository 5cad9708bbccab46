//! Append and read for the experience_events table. Payloads stay opaque:
//! stored and returned as raw JSON.

use chrono::DateTime;
use rusqlite::{params, Connection};

use tapestry_core::errors::TapestryResult;
use tapestry_core::model::ExperienceEvent;

use crate::{fmt_ts, to_storage_err};

pub fn record_event(conn: &Connection, event: &ExperienceEvent) -> TapestryResult<()> {
    let payload = serde_json::to_string(&event.payload)
        .map_err(|e| to_storage_err(format!("payload encode: {e}")))?;
    conn.execute(
        "INSERT INTO experience_events (timestamp, kind, payload, source)
         VALUES (?1, ?2, ?3, ?4)",
        params![fmt_ts(event.timestamp), event.kind, payload, event.source],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// The most recent `limit` events, newest first.
pub fn recent_events(conn: &Connection, limit: usize) -> TapestryResult<Vec<ExperienceEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT timestamp, kind, payload, source FROM experience_events
             ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (timestamp, kind, payload, source) = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(ExperienceEvent {
            timestamp: DateTime::parse_from_rfc3339(&timestamp)
                .map(|t| t.with_timezone(&chrono::Utc))
                .map_err(|e| to_storage_err(format!("bad timestamp {timestamp}: {e}")))?,
            kind,
            payload: serde_json::from_str(&payload)
                .map_err(|e| to_storage_err(format!("payload decode: {e}")))?,
            source,
        });
    }
    Ok(out)
}
