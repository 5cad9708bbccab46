use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Read connections opened for a file-backed store. In-memory stores
    /// route all reads through the writer and ignore this.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
