//! # tapestry-insight
//!
//! Decides which chains matter. A registry of significance patterns is
//! loaded once at startup (validated there, so a scan over a loaded
//! registry never fails) and the matcher emits an `Insight` for every
//! (chain, pattern) match.

pub mod matcher;
pub mod registry;

pub use matcher::InsightMatcher;
pub use registry::{MatchMode, Pattern, PatternEntry, PatternRegistry};
