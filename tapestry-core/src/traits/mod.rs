//! Trait seams between the crates: the graph store contract and the
//! producer capability contract.

mod graph;
mod producer;

pub use graph::{Direction, IConceptGraph};
pub use producer::{CycleContext, PropositionProducer};
