use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::concept::ConceptNode;

/// A single directed, typed assertion from one producer. Immutable; never
/// persisted individually; it is absorbed into the graph as a relation.
///
/// `certainty` is carried raw (not clamped) so that an out-of-range value
/// is rejected at merge time rather than silently corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposition {
    pub subject: ConceptNode,
    pub predicate: String,
    pub object: ConceptNode,
    pub certainty: f64,
    /// Originating domain, e.g. "physics" or "biology". Distinct contexts
    /// across a chain's edges make up the chain's span.
    pub source_context: String,
}

impl Proposition {
    pub fn new(
        subject: ConceptNode,
        predicate: impl Into<String>,
        object: ConceptNode,
        certainty: f64,
        source_context: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
            certainty,
            source_context: source_context.into(),
        }
    }
}

/// A producer's entire output for one synthesis cycle. Discarded after the
/// cycle's chains are derived; only the resulting relations persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeThread {
    /// The producer that emitted this thread.
    pub source: String,
    pub facts: Vec<Proposition>,
    pub principles: BTreeSet<String>,
    pub intensity: f64,
}

impl KnowledgeThread {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            facts: Vec::new(),
            principles: BTreeSet::new(),
            intensity: 0.0,
        }
    }

    pub fn with_facts(mut self, facts: Vec<Proposition>) -> Self {
        self.facts = facts;
        self
    }
}
