//! # tapestry-weaver
//!
//! The synthesis engine. Each cycle: gather knowledge threads from every
//! active producer under a shared deadline, knot their propositions into
//! the concept graph, derive causal chains by transitive matching on
//! shared concepts, and scan the chains for registered significance
//! patterns.

pub mod chains;
pub mod engine;
pub mod gather;
pub mod merge;

pub use chains::ChainWeaver;
pub use engine::{CycleOutcome, SynthesisEngine};
