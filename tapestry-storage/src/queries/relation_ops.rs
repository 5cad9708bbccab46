//! Upsert, lookup, and traversal reads for the relations table.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use tapestry_core::errors::TapestryResult;
use tapestry_core::model::{Certainty, ConceptNode, RelationRecord};
use tapestry_core::traits::Direction;

use crate::{fmt_ts, to_storage_err};

/// Raw row shape before timestamp/JSON parsing.
struct RawRelation {
    subject_name: String,
    subject_category: String,
    predicate: String,
    object_name: String,
    object_category: String,
    weight: f64,
    last_accessed: String,
    contexts: String,
}

const RELATION_COLUMNS: &str = "subject_name, subject_category, predicate, \
     object_name, object_category, weight, last_accessed, contexts";

fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRelation> {
    Ok(RawRelation {
        subject_name: row.get(0)?,
        subject_category: row.get(1)?,
        predicate: row.get(2)?,
        object_name: row.get(3)?,
        object_category: row.get(4)?,
        weight: row.get(5)?,
        last_accessed: row.get(6)?,
        contexts: row.get(7)?,
    })
}

fn parse_ts(s: &str) -> TapestryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {s}: {e}")))
}

fn into_record(raw: RawRelation) -> TapestryResult<RelationRecord> {
    let contexts: BTreeSet<String> = serde_json::from_str(&raw.contexts)
        .map_err(|e| to_storage_err(format!("bad contexts column: {e}")))?;
    Ok(RelationRecord {
        subject: ConceptNode::new(raw.subject_name, raw.subject_category),
        predicate: raw.predicate,
        object: ConceptNode::new(raw.object_name, raw.object_category),
        weight: Certainty::new(raw.weight),
        last_accessed: parse_ts(&raw.last_accessed)?,
        contexts,
    })
}

/// Create or reinforce a triple. New triples start at `certainty`;
/// existing ones accumulate with the saturating rule. `last_accessed` is
/// always refreshed and the source context is added to the row's set.
///
/// Runs read-modify-write inside one transaction on the single write
/// connection, so concurrent reinforcements of the same triple cannot
/// lose updates.
pub fn upsert_relation(
    conn: &Connection,
    subject: &ConceptNode,
    predicate: &str,
    object: &ConceptNode,
    certainty: Certainty,
    source_context: &str,
    now: DateTime<Utc>,
) -> TapestryResult<RelationRecord> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert begin: {e}")))?;

    let existing = select_relation(&tx, subject, predicate, object)?;
    let (weight, mut contexts) = match existing {
        Some(r) => (r.weight.reinforce(certainty), r.contexts),
        None => (certainty, BTreeSet::new()),
    };
    contexts.insert(source_context.to_string());

    let contexts_json = serde_json::to_string(&contexts)
        .map_err(|e| to_storage_err(format!("contexts encode: {e}")))?;
    tx.execute(
        "INSERT OR REPLACE INTO relations (
            subject_name, subject_category, predicate,
            object_name, object_category, weight, last_accessed, contexts
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            subject.name,
            subject.category,
            predicate,
            object.name,
            object.category,
            weight.value(),
            fmt_ts(now),
            contexts_json,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("upsert commit: {e}")))?;

    Ok(RelationRecord {
        subject: subject.clone(),
        predicate: predicate.to_string(),
        object: object.clone(),
        weight,
        last_accessed: now,
        contexts,
    })
}

fn select_relation(
    conn: &Connection,
    subject: &ConceptNode,
    predicate: &str,
    object: &ConceptNode,
) -> TapestryResult<Option<RelationRecord>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {RELATION_COLUMNS} FROM relations
                 WHERE subject_name = ?1 AND subject_category = ?2
                   AND predicate = ?3
                   AND object_name = ?4 AND object_category = ?5"
            ),
            params![
                subject.name,
                subject.category,
                predicate,
                object.name,
                object.category
            ],
            read_raw,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_record).transpose()
}

/// Plain lookup: no recency refresh.
pub fn get_relation(
    conn: &Connection,
    subject: &ConceptNode,
    predicate: &str,
    object: &ConceptNode,
) -> TapestryResult<Option<RelationRecord>> {
    select_relation(conn, subject, predicate, object)
}

/// Relations touching `concept` on the given side, ordered by weight
/// descending, ties broken by most recent access. Traversal counts as
/// access: every returned row's `last_accessed` is set to `now`.
pub fn neighbors(
    conn: &Connection,
    concept: &ConceptNode,
    direction: Direction,
    now: DateTime<Utc>,
) -> TapestryResult<Vec<RelationRecord>> {
    let (name_col, cat_col) = match direction {
        Direction::Outgoing => ("subject_name", "subject_category"),
        Direction::Incoming => ("object_name", "object_category"),
    };

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("neighbors begin: {e}")))?;

    let mut records = {
        let mut stmt = tx
            .prepare(&format!(
                "SELECT {RELATION_COLUMNS} FROM relations
                 WHERE {name_col} = ?1 AND {cat_col} = ?2
                 ORDER BY weight DESC, last_accessed DESC"
            ))
            .map_err(|e| to_storage_err(e.to_string()))?;
        let rows = stmt
            .query_map(params![concept.name, concept.category], read_raw)
            .map_err(|e| to_storage_err(e.to_string()))?;
        let mut records = Vec::new();
        for raw in rows {
            let raw = raw.map_err(|e| to_storage_err(e.to_string()))?;
            records.push(into_record(raw)?);
        }
        records
    };

    for record in &mut records {
        tx.execute(
            "UPDATE relations SET last_accessed = ?1
             WHERE subject_name = ?2 AND subject_category = ?3
               AND predicate = ?4
               AND object_name = ?5 AND object_category = ?6",
            params![
                fmt_ts(now),
                record.subject.name,
                record.subject.category,
                record.predicate,
                record.object.name,
                record.object.category,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        record.last_accessed = now;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("neighbors commit: {e}")))?;
    Ok(records)
}

/// Relations created or reinforced at or after `since`.
pub fn touched_since(
    conn: &Connection,
    since: DateTime<Utc>,
) -> TapestryResult<Vec<RelationRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RELATION_COLUMNS} FROM relations
             WHERE last_accessed >= ?1
             ORDER BY weight DESC, last_accessed DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![fmt_ts(since)], read_raw)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut records = Vec::new();
    for raw in rows {
        let raw = raw.map_err(|e| to_storage_err(e.to_string()))?;
        records.push(into_record(raw)?);
    }
    Ok(records)
}

pub fn relation_count(conn: &Connection) -> TapestryResult<usize> {
    conn.query_row("SELECT COUNT(*) FROM relations", [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Distinct concepts across both ends of every relation.
pub fn concept_count(conn: &Connection) -> TapestryResult<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM (
            SELECT subject_name AS name, subject_category AS category FROM relations
            UNION
            SELECT object_name, object_category FROM relations
        )",
        [],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}
