use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_CHAIN_HARD_CAP;
use crate::model::PredicateCatalog;

/// Synthesis engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaverConfig {
    /// Maximum chain length during derivation.
    pub max_chain_length: usize,
    /// Chains below this aggregate certainty are discarded.
    pub min_aggregate_certainty: f64,
    /// Default per-cycle producer deadline (milliseconds), used when the
    /// scheduler does not pass an explicit deadline.
    pub producer_deadline_ms: u64,
    /// Caller-declared predicate classification.
    pub predicates: PredicateCatalog,
}

impl WeaverConfig {
    /// Chain length bounded by the hard cap regardless of configuration.
    pub fn effective_max_chain_length(&self) -> usize {
        self.max_chain_length.clamp(1, MAX_CHAIN_HARD_CAP)
    }
}

impl Default for WeaverConfig {
    fn default() -> Self {
        Self {
            max_chain_length: defaults::DEFAULT_MAX_CHAIN_LENGTH,
            min_aggregate_certainty: defaults::DEFAULT_MIN_AGGREGATE_CERTAINTY,
            producer_deadline_ms: defaults::DEFAULT_PRODUCER_DEADLINE_MS,
            predicates: PredicateCatalog::default(),
        }
    }
}
