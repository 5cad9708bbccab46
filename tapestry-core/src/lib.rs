//! # tapestry-core
//!
//! Foundation crate for the Tapestry causal synthesis engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CacheConfig, StorageConfig, TapestryConfig, WeaverConfig};
pub use errors::{TapestryError, TapestryResult};
pub use model::{
    CachedContent, CausalChain, Certainty, ConceptNode, Insight, KnowledgeThread,
    PredicateCatalog, Proposition, RelationRecord, Severity,
};
pub use traits::{CycleContext, Direction, IConceptGraph, PropositionProducer};
