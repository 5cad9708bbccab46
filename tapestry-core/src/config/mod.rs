//! Configuration structs. Every field has a serde default so partial TOML
//! files deserialize cleanly.

mod cache_config;
pub mod defaults;
mod storage_config;
mod weaver_config;

pub use cache_config::CacheConfig;
pub use storage_config::StorageConfig;
pub use weaver_config::WeaverConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TapestryError, TapestryResult};

/// Whole-engine configuration, as loaded from a single TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TapestryConfig {
    pub weaver: WeaverConfig,
    pub cache: CacheConfig,
    pub storage: StorageConfig,
}

impl TapestryConfig {
    pub fn from_toml_str(raw: &str) -> TapestryResult<Self> {
        toml::from_str(raw).map_err(|e| TapestryError::Serialization {
            message: format!("invalid config: {e}"),
        })
    }

    pub fn load_from_path(path: &Path) -> TapestryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TapestryError::Serialization {
            message: format!("cannot read config {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}
