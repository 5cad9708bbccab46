use std::fmt;

use serde::{Deserialize, Serialize};

/// A named concept in the graph. Identity is (name, category): the same
/// name in two categories is two distinct concepts (homonyms are allowed
/// across categories). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptNode {
    pub name: String,
    /// Category tag, e.g. "Matter", "Energy", "Action".
    pub category: String,
}

impl ConceptNode {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for ConceptNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.name)
    }
}
