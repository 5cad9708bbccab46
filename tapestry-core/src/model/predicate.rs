use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Caller-declared classification of predicates.
///
/// Chain derivation extends only along causal predicates ("heats",
/// "conducts", "damages"); a taxonomic predicate ("is-a") terminates
/// extension. Self-relations are rejected unless the predicate is listed
/// as reflexive-safe. Unknown predicates are non-causal and non-reflexive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredicateCatalog {
    pub causal: BTreeSet<String>,
    pub reflexive: BTreeSet<String>,
}

impl PredicateCatalog {
    pub fn new(
        causal: impl IntoIterator<Item = String>,
        reflexive: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            causal: causal.into_iter().collect(),
            reflexive: reflexive.into_iter().collect(),
        }
    }

    pub fn is_causal(&self, predicate: &str) -> bool {
        self.causal.contains(predicate)
    }

    pub fn is_reflexive(&self, predicate: &str) -> bool {
        self.reflexive.contains(predicate)
    }
}
