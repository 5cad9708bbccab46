use chrono::Utc;
use tapestry_core::errors::{GraphError, TapestryError};
use tapestry_core::model::{ConceptNode, ExperienceEvent, PredicateCatalog};
use tapestry_core::traits::{Direction, IConceptGraph};
use tapestry_storage::GraphStore;

fn catalog() -> PredicateCatalog {
    PredicateCatalog::new(
        ["heats", "conducts", "burns", "cools"].map(String::from),
        ["resembles"].map(String::from),
    )
}

fn store() -> GraphStore {
    GraphStore::open_in_memory(catalog()).unwrap()
}

fn concept(name: &str) -> ConceptNode {
    ConceptNode::new(name, "Matter")
}

// =============================================================================
// Upsert: create, reinforce, dedup
// =============================================================================

#[test]
fn first_upsert_creates_with_weight_equal_to_certainty() {
    let store = store();
    let r = store
        .upsert_relation(&concept("Stove"), "heats", &concept("Pan"), 0.9, "physics")
        .unwrap();
    assert!((r.weight.value() - 0.9).abs() < 1e-12);
    assert_eq!(store.relation_count().unwrap(), 1);
}

#[test]
fn same_triple_twice_yields_one_row_with_accumulated_weight() {
    let store = store();
    let metal = ConceptNode::new("Metal", "Matter");
    let heat = ConceptNode::new("Heat", "Energy");
    store
        .upsert_relation(&metal, "conducts", &heat, 0.5, "physics")
        .unwrap();
    let r = store
        .upsert_relation(&metal, "conducts", &heat, 0.5, "material")
        .unwrap();
    // 0.5 + 0.5 * (1 - 0.5) = 0.75, not 1.0 and not two rows.
    assert!((r.weight.value() - 0.75).abs() < 1e-12);
    assert_eq!(store.relation_count().unwrap(), 1);
    assert_eq!(r.contexts.len(), 2, "both source contexts recorded");
}

#[test]
fn repeated_reinforcement_saturates_below_one() {
    let store = store();
    let mut last = 0.0;
    for _ in 0..50 {
        let r = store
            .upsert_relation(&concept("A"), "heats", &concept("B"), 0.4, "physics")
            .unwrap();
        assert!(r.weight.value() > last);
        last = r.weight.value();
    }
    assert!(last < 1.0);
    assert!(last > 0.999);
    assert_eq!(store.relation_count().unwrap(), 1);
}

#[test]
fn homonyms_across_categories_are_distinct_rows() {
    let store = store();
    let heat_energy = ConceptNode::new("Heat", "Energy");
    let heat_sensation = ConceptNode::new("Heat", "Sensation");
    store
        .upsert_relation(&concept("Pan"), "conducts", &heat_energy, 0.8, "physics")
        .unwrap();
    store
        .upsert_relation(&concept("Pan"), "conducts", &heat_sensation, 0.6, "biology")
        .unwrap();
    assert_eq!(store.relation_count().unwrap(), 2);
    assert_eq!(store.concept_count().unwrap(), 3);
}

#[test]
fn contradictory_predicates_are_distinct_rows() {
    let store = store();
    store
        .upsert_relation(&concept("Fan"), "cools", &concept("Room"), 0.8, "physics")
        .unwrap();
    store
        .upsert_relation(&concept("Fan"), "heats", &concept("Room"), 0.3, "physics")
        .unwrap();
    assert_eq!(store.relation_count().unwrap(), 2);
}

// =============================================================================
// Upsert: validation
// =============================================================================

#[test]
fn self_relation_rejected_for_non_reflexive_predicate() {
    let store = store();
    let result =
        store.upsert_relation(&concept("Fire"), "heats", &concept("Fire"), 0.9, "physics");
    assert!(matches!(
        result,
        Err(TapestryError::Graph(GraphError::InvalidRelation { .. }))
    ));
}

#[test]
fn self_relation_allowed_for_reflexive_predicate() {
    let store = store();
    let result = store.upsert_relation(
        &concept("Fire"),
        "resembles",
        &concept("Fire"),
        0.9,
        "physics",
    );
    assert!(result.is_ok());
}

#[test]
fn certainty_outside_unit_interval_rejected() {
    let store = store();
    for bad in [-0.1, 1.1] {
        let result =
            store.upsert_relation(&concept("A"), "heats", &concept("B"), bad, "physics");
        assert!(matches!(
            result,
            Err(TapestryError::Graph(GraphError::CertaintyOutOfRange { .. }))
        ));
    }
    assert_eq!(store.relation_count().unwrap(), 0);
}

#[test]
fn empty_concept_name_rejected() {
    let store = store();
    let result = store.upsert_relation(&concept(""), "heats", &concept("B"), 0.5, "physics");
    assert!(matches!(
        result,
        Err(TapestryError::Graph(GraphError::EmptyConcept))
    ));
}

#[test]
fn empty_predicate_rejected_with_its_own_error() {
    let store = store();
    let err = store
        .upsert_relation(&concept("A"), "", &concept("B"), 0.5, "physics")
        .unwrap_err();
    assert!(err.is_rejection());
    assert!(matches!(
        err,
        TapestryError::Graph(GraphError::EmptyPredicate)
    ));
    assert_eq!(store.relation_count().unwrap(), 0);
}

#[test]
fn rejections_are_rejections_but_unavailability_is_not() {
    assert!(TapestryError::Graph(GraphError::EmptyConcept).is_rejection());
    assert!(!TapestryError::Graph(GraphError::StoreUnavailable {
        message: "gone".into()
    })
    .is_rejection());
}

// =============================================================================
// Reads: neighbors, get_relation, touched_since
// =============================================================================

#[test]
fn neighbors_ordered_by_descending_weight() {
    let store = store();
    let pan = concept("Pan");
    store
        .upsert_relation(&pan, "heats", &concept("Air"), 0.3, "physics")
        .unwrap();
    store
        .upsert_relation(&pan, "conducts", &ConceptNode::new("Heat", "Energy"), 0.9, "physics")
        .unwrap();
    store
        .upsert_relation(&pan, "burns", &concept("Hand"), 0.6, "biology")
        .unwrap();

    let out = store.neighbors(&pan, Direction::Outgoing).unwrap();
    let weights: Vec<f64> = out.iter().map(|r| r.weight.value()).collect();
    assert_eq!(out.len(), 3);
    assert!(weights.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn neighbors_refreshes_last_accessed() {
    let store = store();
    let before = store
        .upsert_relation(&concept("A"), "heats", &concept("B"), 0.5, "physics")
        .unwrap()
        .last_accessed;

    std::thread::sleep(std::time::Duration::from_millis(5));
    let out = store.neighbors(&concept("A"), Direction::Outgoing).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].last_accessed > before, "traversal counts as access");

    let stored = store
        .get_relation(&concept("A"), "heats", &concept("B"))
        .unwrap()
        .unwrap();
    assert!(stored.last_accessed > before);
}

#[test]
fn incoming_neighbors_match_object_side() {
    let store = store();
    store
        .upsert_relation(&concept("Stove"), "heats", &concept("Pan"), 0.9, "physics")
        .unwrap();
    store
        .upsert_relation(&concept("Sun"), "heats", &concept("Pan"), 0.7, "physics")
        .unwrap();
    let incoming = store.neighbors(&concept("Pan"), Direction::Incoming).unwrap();
    assert_eq!(incoming.len(), 2);
    let outgoing = store.neighbors(&concept("Pan"), Direction::Outgoing).unwrap();
    assert!(outgoing.is_empty());
}

#[test]
fn get_relation_returns_none_for_unknown_triple() {
    let store = store();
    let missing = store
        .get_relation(&concept("A"), "heats", &concept("B"))
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn touched_since_returns_only_recent_rows() {
    let store = store();
    store
        .upsert_relation(&concept("Old"), "heats", &concept("Thing"), 0.5, "physics")
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let cutoff = Utc::now();
    std::thread::sleep(std::time::Duration::from_millis(5));
    store
        .upsert_relation(&concept("New"), "heats", &concept("Thing"), 0.5, "physics")
        .unwrap();

    let touched = store.touched_since(cutoff).unwrap();
    assert_eq!(touched.len(), 1);
    assert_eq!(touched[0].subject.name, "New");
}

// =============================================================================
// Experience log
// =============================================================================

#[test]
fn experience_events_round_trip_with_opaque_payload() {
    let store = store();
    store
        .record_event(&ExperienceEvent {
            timestamp: Utc::now(),
            kind: "perception".to_string(),
            payload: serde_json::json!({"vector": [0.1, 0.9], "note": "untouched"}),
            source: "sensor-a".to_string(),
        })
        .unwrap();

    let events = store.recent_events(10).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "perception");
    assert_eq!(events[0].payload["note"], "untouched");
}
