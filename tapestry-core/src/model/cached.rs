use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached piece of fetched external content, keyed by a BLAKE3 content
/// address of its locator. Independent of the graph; producers may read cached
/// content while being gathered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedContent {
    /// Content address: truncated BLAKE3 hex of the locator.
    pub key: String,
    pub locator: String,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
}

impl CachedContent {
    /// Stable content address for a locator: BLAKE3 hex, truncated to 16
    /// characters. The table only needs a short stable key.
    pub fn key_for(locator: &str) -> String {
        blake3::hash(locator.as_bytes()).to_hex()[..16].to_string()
    }
}
