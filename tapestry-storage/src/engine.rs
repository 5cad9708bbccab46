//! GraphStore owns the write connection and read pool, implements
//! IConceptGraph, and exposes the cache and experience-event tables. Input
//! validation for upserts lives here so the SQL layer only ever sees
//! well-formed rows.

use std::path::Path;

use chrono::{DateTime, Utc};

use tapestry_core::config::StorageConfig;
use tapestry_core::errors::{GraphError, TapestryResult};
use tapestry_core::model::{
    CachedContent, Certainty, ConceptNode, ExperienceEvent, PredicateCatalog, RelationRecord,
};
use tapestry_core::traits::{Direction, IConceptGraph};

use crate::migrations;
use crate::pool::{ReadPool, WriteConnection};
use crate::queries::{cache_ops, event_ops, relation_ops};

/// The persistent store shared by the weaver and the content cache.
pub struct GraphStore {
    writer: WriteConnection,
    /// Present in file-backed mode. In-memory connections are isolated
    /// databases, so all reads route through the writer there.
    readers: Option<ReadPool>,
    catalog: PredicateCatalog,
}

impl GraphStore {
    /// Open a store backed by a file on disk with default storage settings.
    pub fn open(path: &Path, catalog: PredicateCatalog) -> TapestryResult<Self> {
        Self::open_with_config(path, catalog, &StorageConfig::default())
    }

    /// Open a file-backed store, sizing the read pool from configuration.
    pub fn open_with_config(
        path: &Path,
        catalog: PredicateCatalog,
        config: &StorageConfig,
    ) -> TapestryResult<Self> {
        let writer = WriteConnection::open(path)?;
        writer.with_conn_sync(migrations::run_migrations)?;
        let readers = ReadPool::open(path, config.read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            catalog,
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory(catalog: PredicateCatalog) -> TapestryResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        writer.with_conn_sync(migrations::run_migrations)?;
        Ok(Self {
            writer,
            readers: None,
            catalog,
        })
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> TapestryResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> TapestryResult<T>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }

    fn validate_upsert(
        &self,
        subject: &ConceptNode,
        predicate: &str,
        object: &ConceptNode,
        certainty: f64,
    ) -> Result<Certainty, GraphError> {
        if subject.name.is_empty() || object.name.is_empty() {
            return Err(GraphError::EmptyConcept);
        }
        if predicate.is_empty() {
            return Err(GraphError::EmptyPredicate);
        }
        let certainty = Certainty::try_new(certainty)?;
        if subject == object && !self.catalog.is_reflexive(predicate) {
            return Err(GraphError::InvalidRelation {
                reason: format!("self-relation {subject} -[{predicate}]-> {object}"),
            });
        }
        Ok(certainty)
    }

    // --- Content cache table ---

    pub fn cache_get(&self, key: &str) -> TapestryResult<Option<CachedContent>> {
        self.with_reader(|conn| cache_ops::get_entry(conn, key))
    }

    pub fn cache_touch(&self, key: &str, now: DateTime<Utc>) -> TapestryResult<()> {
        self.writer
            .with_conn_sync(|conn| cache_ops::touch_entry(conn, key, now))
    }

    pub fn cache_insert(&self, entry: &CachedContent) -> TapestryResult<()> {
        self.writer
            .with_conn_sync(|conn| cache_ops::insert_entry(conn, entry))
    }

    pub fn cache_entry_count(&self) -> TapestryResult<usize> {
        self.with_reader(cache_ops::entry_count)
    }

    pub fn cache_eviction_candidates(
        &self,
    ) -> TapestryResult<Vec<cache_ops::EvictionCandidate>> {
        self.with_reader(cache_ops::eviction_candidates)
    }

    pub fn cache_delete(&self, keys: &[String]) -> TapestryResult<usize> {
        self.writer
            .with_conn_sync(|conn| cache_ops::delete_entries(conn, keys))
    }

    // --- Experience log (read-mostly; writers are external) ---

    pub fn record_event(&self, event: &ExperienceEvent) -> TapestryResult<()> {
        self.writer
            .with_conn_sync(|conn| event_ops::record_event(conn, event))
    }

    pub fn recent_events(&self, limit: usize) -> TapestryResult<Vec<ExperienceEvent>> {
        self.with_reader(|conn| event_ops::recent_events(conn, limit))
    }
}

impl IConceptGraph for GraphStore {
    fn upsert_relation(
        &self,
        subject: &ConceptNode,
        predicate: &str,
        object: &ConceptNode,
        certainty: f64,
        source_context: &str,
    ) -> TapestryResult<RelationRecord> {
        let certainty = self.validate_upsert(subject, predicate, object, certainty)?;
        let now = Utc::now();
        self.writer.with_conn_sync(|conn| {
            relation_ops::upsert_relation(
                conn,
                subject,
                predicate,
                object,
                certainty,
                source_context,
                now,
            )
        })
    }

    fn neighbors(
        &self,
        concept: &ConceptNode,
        direction: Direction,
    ) -> TapestryResult<Vec<RelationRecord>> {
        // The recency refresh makes this a write, so it takes the writer.
        let now = Utc::now();
        self.writer
            .with_conn_sync(|conn| relation_ops::neighbors(conn, concept, direction, now))
    }

    fn get_relation(
        &self,
        subject: &ConceptNode,
        predicate: &str,
        object: &ConceptNode,
    ) -> TapestryResult<Option<RelationRecord>> {
        self.with_reader(|conn| relation_ops::get_relation(conn, subject, predicate, object))
    }

    fn touched_since(&self, since: DateTime<Utc>) -> TapestryResult<Vec<RelationRecord>> {
        self.with_reader(|conn| relation_ops::touched_since(conn, since))
    }

    fn relation_count(&self) -> TapestryResult<usize> {
        self.with_reader(relation_ops::relation_count)
    }

    fn concept_count(&self) -> TapestryResult<usize> {
        self.with_reader(relation_ops::concept_count)
    }
}
