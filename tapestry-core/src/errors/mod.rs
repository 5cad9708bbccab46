//! Error types for the Tapestry workspace.
//!
//! Each subsystem has its own `thiserror` enum; `TapestryError` aggregates
//! them with `#[from]` conversions so crate boundaries stay clean.

mod cache_error;
mod graph_error;
mod pattern_error;
mod weave_error;

pub use cache_error::CacheError;
pub use graph_error::GraphError;
pub use pattern_error::PatternError;
pub use weave_error::WeaveError;

/// Result alias used throughout the workspace.
pub type TapestryResult<T> = Result<T, TapestryError>;

/// Top-level error for the Tapestry engine.
#[derive(Debug, thiserror::Error)]
pub enum TapestryError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("weave error: {0}")]
    Weave(#[from] WeaveError),

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl TapestryError {
    /// True when the error is a per-proposition rejection: the offending
    /// proposition is skipped and counted, but the cycle continues.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Graph(g) if g.is_rejection())
    }
}
