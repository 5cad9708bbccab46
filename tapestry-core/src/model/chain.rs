use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::concept::ConceptNode;
use super::relation::RelationRecord;

/// An ordered sequence of relations where each link's object is the next
/// link's subject. Recomputed each cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalChain {
    pub links: Vec<RelationRecord>,
}

impl CausalChain {
    pub fn new(links: Vec<RelationRecord>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Product of edge weights. A five-hop inference is inherently less
    /// certain than a two-hop one: the product never exceeds the weakest
    /// edge.
    pub fn aggregate_certainty(&self) -> f64 {
        self.links
            .iter()
            .map(|r| r.weight.value())
            .product::<f64>()
    }

    /// Distinct source contexts contributing edges. A chain crossing
    /// domains (physics → material → biology) spans wider than one
    /// confined to a single domain.
    pub fn span(&self) -> BTreeSet<String> {
        self.links
            .iter()
            .flat_map(|r| r.contexts.iter().cloned())
            .collect()
    }

    /// The chain's ordered predicate sequence, for pattern matching.
    pub fn predicates(&self) -> Vec<&str> {
        self.links.iter().map(|r| r.predicate.as_str()).collect()
    }

    /// Every concept the chain touches, in order: first subject, then each
    /// link's object.
    pub fn concepts(&self) -> Vec<&ConceptNode> {
        let mut out = Vec::with_capacity(self.links.len() + 1);
        if let Some(first) = self.links.first() {
            out.push(&first.subject);
        }
        out.extend(self.links.iter().map(|r| &r.object));
        out
    }

    /// True when `other`'s links appear as a contiguous run inside this
    /// chain. Used to suppress sub-chains of a longer derivation.
    pub fn contains_chain(&self, other: &CausalChain) -> bool {
        if other.links.is_empty() || other.links.len() > self.links.len() {
            return false;
        }
        self.links
            .windows(other.links.len())
            .any(|w| {
                w.iter()
                    .zip(other.links.iter())
                    .all(|(a, b)| a.triple_key() == b.triple_key())
            })
    }
}
