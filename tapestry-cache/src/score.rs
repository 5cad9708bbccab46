//! Eviction score: frequency weighted by inverse recency.
//!
//! `score = access_count / (age_secs + epsilon)`: a rarely used, old
//! entry is evicted before a rarely used but very recent one.

use chrono::{DateTime, Utc};

use tapestry_core::constants::EVICTION_EPSILON_SECS;

pub fn eviction_score(
    access_count: u64,
    last_accessed: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let age_secs = (now - last_accessed).num_milliseconds().max(0) as f64 / 1_000.0;
    access_count as f64 / (age_secs + EVICTION_EPSILON_SECS)
}

/// Whether an entry fetched at `fetched_at` is past the staleness window.
pub fn is_stale(fetched_at: DateTime<Utc>, now: DateTime<Utc>, max_age_secs: u64) -> bool {
    (now - fetched_at).num_seconds() > max_age_secs as i64
}
