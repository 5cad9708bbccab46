use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::Utc;
use tapestry_core::model::{
    CachedContent, CausalChain, Certainty, ConceptNode, PredicateCatalog, RelationRecord, Severity,
};

fn make_relation(subject: &str, predicate: &str, object: &str, weight: f64) -> RelationRecord {
    RelationRecord {
        subject: ConceptNode::new(subject, "Matter"),
        predicate: predicate.to_string(),
        object: ConceptNode::new(object, "Matter"),
        weight: Certainty::new(weight),
        last_accessed: Utc::now(),
        contexts: BTreeSet::from(["physics".to_string()]),
    }
}

// =============================================================================
// Concept identity
// =============================================================================

#[test]
fn concept_identity_is_name_and_category() {
    let a = ConceptNode::new("Heat", "Energy");
    let b = ConceptNode::new("Heat", "Energy");
    let c = ConceptNode::new("Heat", "Sensation");
    assert_eq!(a, b);
    assert_ne!(a, c, "homonyms across categories are distinct concepts");
}

// =============================================================================
// Certainty
// =============================================================================

#[test]
fn certainty_new_clamps() {
    assert_eq!(Certainty::new(1.5).value(), 1.0);
    assert_eq!(Certainty::new(-0.5).value(), 0.0);
}

#[test]
fn certainty_try_new_rejects_out_of_range() {
    assert!(Certainty::try_new(1.01).is_err());
    assert!(Certainty::try_new(-0.01).is_err());
    assert!(Certainty::try_new(f64::NAN).is_err());
    assert!(Certainty::try_new(0.0).is_ok());
    assert!(Certainty::try_new(1.0).is_ok());
}

#[test]
fn reinforce_is_saturating() {
    let w = Certainty::new(0.5);
    let reinforced = w.reinforce(Certainty::new(0.5));
    assert!((reinforced.value() - 0.75).abs() < 1e-12);

    let mut w = Certainty::new(0.3);
    for _ in 0..100 {
        let next = w.reinforce(Certainty::new(0.3));
        assert!(next.value() > w.value());
        w = next;
    }
    assert!(w.value() < 1.0, "saturates below 1.0");
    assert!(w.value() > 0.999, "approaches 1.0");
}

// =============================================================================
// Chains
// =============================================================================

#[test]
fn aggregate_certainty_is_product_of_weights() {
    let chain = CausalChain::new(vec![
        make_relation("Stove", "heats", "Pan", 0.9),
        make_relation("Pan", "conducts", "Heat", 0.8),
        make_relation("Heat", "burns", "Skin", 0.7),
    ]);
    assert!((chain.aggregate_certainty() - 0.504).abs() < 1e-12);
}

#[test]
fn chain_concepts_and_predicates_are_ordered() {
    let chain = CausalChain::new(vec![
        make_relation("A", "heats", "B", 0.9),
        make_relation("B", "burns", "C", 0.8),
    ]);
    assert_eq!(chain.predicates(), vec!["heats", "burns"]);
    let names: Vec<&str> = chain.concepts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn contains_chain_detects_contiguous_runs() {
    let long = CausalChain::new(vec![
        make_relation("A", "heats", "B", 0.9),
        make_relation("B", "conducts", "C", 0.8),
        make_relation("C", "burns", "D", 0.7),
    ]);
    let tail = CausalChain::new(vec![
        make_relation("B", "conducts", "C", 0.8),
        make_relation("C", "burns", "D", 0.7),
    ]);
    let scattered = CausalChain::new(vec![
        make_relation("A", "heats", "B", 0.9),
        make_relation("C", "burns", "D", 0.7),
    ]);
    assert!(long.contains_chain(&tail));
    assert!(!long.contains_chain(&scattered), "must be contiguous");
    assert!(!tail.contains_chain(&long));
}

#[test]
fn span_unions_contexts_across_links() {
    let mut r1 = make_relation("A", "heats", "B", 0.9);
    r1.contexts = BTreeSet::from(["physics".to_string()]);
    let mut r2 = make_relation("B", "burns", "C", 0.8);
    r2.contexts = BTreeSet::from(["biology".to_string(), "physics".to_string()]);
    let chain = CausalChain::new(vec![r1, r2]);
    let span = chain.span();
    assert_eq!(span.len(), 2);
    assert!(span.contains("physics") && span.contains("biology"));
}

// =============================================================================
// Severity, catalog, cache keys
// =============================================================================

#[test]
fn severity_parses_known_values_only() {
    assert_eq!(Severity::from_str("danger").unwrap(), Severity::Danger);
    assert_eq!(Severity::from_str("warn").unwrap(), Severity::Warn);
    assert_eq!(Severity::from_str("info").unwrap(), Severity::Info);
    assert!(Severity::from_str("critical").is_err());
}

#[test]
fn predicate_catalog_classifies() {
    let catalog = PredicateCatalog::new(
        ["heats".to_string(), "burns".to_string()],
        ["resembles".to_string()],
    );
    assert!(catalog.is_causal("heats"));
    assert!(!catalog.is_causal("is-a"));
    assert!(catalog.is_reflexive("resembles"));
    assert!(!catalog.is_reflexive("heats"));
}

#[test]
fn cache_key_is_stable_and_distinct() {
    let k1 = CachedContent::key_for("https://example.org/a");
    let k2 = CachedContent::key_for("https://example.org/a");
    let k3 = CachedContent::key_for("https://example.org/b");
    assert_eq!(k1, k2);
    assert_ne!(k1, k3);
    assert_eq!(k1.len(), 16, "truncated hex digest");
    assert!(k1.bytes().all(|b| b.is_ascii_hexdigit()));
}
