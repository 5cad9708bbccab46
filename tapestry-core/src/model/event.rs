use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the append-only experience log. The payload is opaque to
/// this crate: it is stored and returned as raw JSON, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub payload: serde_json::Value,
    pub source: String,
}
