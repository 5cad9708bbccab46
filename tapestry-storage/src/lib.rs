//! # tapestry-storage
//!
//! SQLite persistence for the Tapestry engine: the relation table (the
//! concept graph), the cached-content table, and the append-only
//! experience-event table. Single write connection plus a round-robin
//! read pool, WAL journal mode, versioned migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::GraphStore;

use chrono::{DateTime, SecondsFormat, Utc};
use tapestry_core::errors::{GraphError, TapestryError};

/// Map an underlying SQLite failure to the store-unavailable error class.
pub(crate) fn to_storage_err(message: impl Into<String>) -> TapestryError {
    TapestryError::Graph(GraphError::StoreUnavailable {
        message: message.into(),
    })
}

/// Fixed-precision RFC 3339 so stored timestamps compare correctly as
/// text in SQL (`ORDER BY` / `>=` on the column).
pub(crate) fn fmt_ts(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}
