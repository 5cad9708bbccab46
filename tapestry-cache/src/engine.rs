//! ContentCache: get-or-fetch with a staleness window, eviction after
//! every insertion.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use tapestry_core::config::CacheConfig;
use tapestry_core::errors::{CacheError, TapestryResult};
use tapestry_core::model::CachedContent;
use tapestry_storage::GraphStore;

use crate::score::{eviction_score, is_stale};

/// Cache engine over the shared store's cached_content table.
pub struct ContentCache {
    store: Arc<GraphStore>,
    config: CacheConfig,
}

impl ContentCache {
    pub fn new(store: Arc<GraphStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    /// Return the cached content for `locator`, fetching on miss or
    /// staleness. A fresh hit bumps `access_count` and refreshes
    /// `last_accessed`; a fetched result is stored with `access_count = 1`.
    ///
    /// A failed fetch propagates to the caller and stores nothing. There
    /// is no negative caching, so repeated failures are not suppressed.
    pub fn get_or_fetch<F>(&self, locator: &str, fetch_fn: F) -> TapestryResult<String>
    where
        F: FnOnce(&str) -> Result<String, String>,
    {
        let key = CachedContent::key_for(locator);
        let now = Utc::now();

        if let Some(entry) = self.store.cache_get(&key)? {
            if !is_stale(entry.fetched_at, now, self.config.max_age_secs) {
                self.store.cache_touch(&key, now)?;
                return Ok(entry.content);
            }
            debug!(locator, "cache entry stale, refetching");
        }

        let content = fetch_fn(locator).map_err(|reason| CacheError::FetchFailed {
            locator: locator.to_string(),
            reason,
        })?;

        self.store.cache_insert(&CachedContent {
            key,
            locator: locator.to_string(),
            content: content.clone(),
            fetched_at: now,
            last_accessed: now,
            access_count: 1,
        })?;
        self.evict_if_over_capacity()?;

        Ok(content)
    }

    /// Evict the lowest-scored entries until the cache is back at
    /// capacity. Never evicts more than necessary.
    pub fn evict_if_over_capacity(&self) -> TapestryResult<usize> {
        let count = self.store.cache_entry_count()?;
        if count <= self.config.capacity {
            return Ok(0);
        }
        let excess = count - self.config.capacity;

        let now = Utc::now();
        let mut candidates = self.store.cache_eviction_candidates()?;
        candidates.sort_by(|a, b| {
            let sa = eviction_score(a.access_count, a.last_accessed, now);
            let sb = eviction_score(b.access_count, b.last_accessed, now);
            sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let doomed: Vec<String> = candidates
            .into_iter()
            .take(excess)
            .map(|c| c.key)
            .collect();
        let evicted = self.store.cache_delete(&doomed)?;
        debug!(evicted, "cache eviction pass");
        Ok(evicted)
    }

    pub fn entry_count(&self) -> TapestryResult<usize> {
        self.store.cache_entry_count()
    }
}
