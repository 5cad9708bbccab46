use serde::{Deserialize, Serialize};

use super::defaults;

/// Content cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry count above which eviction runs.
    pub capacity: usize,
    /// Staleness window (seconds): older entries are treated as absent.
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            max_age_secs: defaults::DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}
