//! File-backed tests: data survives a close/reopen, and migrations are
//! idempotent across opens.

use chrono::Utc;
use tapestry_core::config::StorageConfig;
use tapestry_core::model::{CachedContent, ConceptNode, PredicateCatalog};
use tapestry_core::traits::IConceptGraph;
use tapestry_storage::GraphStore;

fn catalog() -> PredicateCatalog {
    PredicateCatalog::new(["heats".to_string(), "burns".to_string()], [])
}

#[test]
fn relations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapestry.db");
    let stove = ConceptNode::new("Stove", "Matter");
    let pan = ConceptNode::new("Pan", "Matter");

    {
        let store = GraphStore::open(&path, catalog()).unwrap();
        store
            .upsert_relation(&stove, "heats", &pan, 0.9, "physics")
            .unwrap();
    }

    let store = GraphStore::open(&path, catalog()).unwrap();
    let r = store.get_relation(&stove, "heats", &pan).unwrap().unwrap();
    assert!((r.weight.value() - 0.9).abs() < 1e-12);
    assert!(r.contexts.contains("physics"));
}

#[test]
fn reinforcement_accumulates_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapestry.db");
    let a = ConceptNode::new("A", "Matter");
    let b = ConceptNode::new("B", "Matter");

    {
        let store = GraphStore::open(&path, catalog()).unwrap();
        store.upsert_relation(&a, "heats", &b, 0.5, "physics").unwrap();
    }
    {
        let store = GraphStore::open(&path, catalog()).unwrap();
        let r = store.upsert_relation(&a, "heats", &b, 0.5, "physics").unwrap();
        assert!((r.weight.value() - 0.75).abs() < 1e-12);
    }

    let store = GraphStore::open(&path, catalog()).unwrap();
    assert_eq!(store.relation_count().unwrap(), 1);
}

#[test]
fn cache_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapestry.db");
    let now = Utc::now();

    {
        let store = GraphStore::open(&path, catalog()).unwrap();
        store
            .cache_insert(&CachedContent {
                key: CachedContent::key_for("doc://thermal"),
                locator: "doc://thermal".to_string(),
                content: "conductivity table".to_string(),
                fetched_at: now,
                last_accessed: now,
                access_count: 1,
            })
            .unwrap();
    }

    let store = GraphStore::open(&path, catalog()).unwrap();
    let entry = store
        .cache_get(&CachedContent::key_for("doc://thermal"))
        .unwrap()
        .unwrap();
    assert_eq!(entry.content, "conductivity table");
    assert_eq!(entry.access_count, 1);
}

#[test]
fn configured_read_pool_serves_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapestry.db");
    let a = ConceptNode::new("A", "Matter");
    let b = ConceptNode::new("B", "Matter");

    let store = GraphStore::open_with_config(
        &path,
        catalog(),
        &StorageConfig { read_pool_size: 2 },
    )
    .unwrap();
    store.upsert_relation(&a, "heats", &b, 0.9, "physics").unwrap();

    // More lookups than readers, so the round-robin wraps.
    for _ in 0..5 {
        let r = store.get_relation(&a, "heats", &b).unwrap().unwrap();
        assert!((r.weight.value() - 0.9).abs() < 1e-12);
    }
}

#[test]
fn repeated_open_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapestry.db");
    for _ in 0..3 {
        let store = GraphStore::open(&path, catalog()).unwrap();
        assert_eq!(store.cache_entry_count().unwrap(), 0);
    }
}
