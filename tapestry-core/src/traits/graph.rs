use chrono::{DateTime, Utc};

use crate::errors::TapestryResult;
use crate::model::{ConceptNode, RelationRecord};

/// Which side of a relation a concept sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Relations where the concept is the subject.
    Outgoing,
    /// Relations where the concept is the object.
    Incoming,
}

/// The concept graph store contract. A single logical shared resource:
/// every upsert is atomic with respect to other calls, and reads observe
/// a consistent snapshot of any in-flight write.
pub trait IConceptGraph: Send + Sync {
    /// Create the (subject, predicate, object) relation with
    /// `weight = certainty`, or reinforce an existing one with the
    /// saturating accumulation rule. Always refreshes `last_accessed`.
    ///
    /// Rejects empty concept names, certainty outside [0, 1], and
    /// self-relations on non-reflexive predicates.
    fn upsert_relation(
        &self,
        subject: &ConceptNode,
        predicate: &str,
        object: &ConceptNode,
        certainty: f64,
        source_context: &str,
    ) -> TapestryResult<RelationRecord>;

    /// Relations touching `concept` on the given side, ordered by
    /// descending weight, ties broken by most recent `last_accessed`.
    /// Traversal counts as access: every returned relation's
    /// `last_accessed` is refreshed.
    fn neighbors(
        &self,
        concept: &ConceptNode,
        direction: Direction,
    ) -> TapestryResult<Vec<RelationRecord>>;

    /// Look up a single triple without refreshing its recency.
    fn get_relation(
        &self,
        subject: &ConceptNode,
        predicate: &str,
        object: &ConceptNode,
    ) -> TapestryResult<Option<RelationRecord>>;

    /// Relations reinforced or created at or after `since`. The weaver
    /// seeds chain derivation with the relations touched in the current
    /// cycle.
    fn touched_since(&self, since: DateTime<Utc>) -> TapestryResult<Vec<RelationRecord>>;

    fn relation_count(&self) -> TapestryResult<usize>;

    fn concept_count(&self) -> TapestryResult<usize>;
}
