use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::certainty::Certainty;
use super::concept::ConceptNode;

/// The persisted form of accumulated propositions sharing one
/// (subject, predicate, object) triple. At most one record exists per
/// triple; uniqueness is enforced by the store's primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub subject: ConceptNode,
    pub predicate: String,
    pub object: ConceptNode,
    /// Starts at the first proposition's certainty; saturating accumulation
    /// on every reinforcement.
    pub weight: Certainty,
    /// Refreshed on every reinforcement and on every traversal read.
    pub last_accessed: DateTime<Utc>,
    /// Distinct source contexts that have contributed to this relation.
    pub contexts: BTreeSet<String>,
}

impl RelationRecord {
    /// Stable identity key for the triple, used for dedup and cycle checks.
    pub fn triple_key(&self) -> (ConceptNode, String, ConceptNode) {
        (
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }
}
