//! Shared data model: concepts, propositions, relations, chains, insights,
//! cached content, and the read-only experience event record.

mod cached;
mod certainty;
mod chain;
mod concept;
mod event;
mod insight;
mod predicate;
mod proposition;
mod relation;

pub use cached::CachedContent;
pub use certainty::Certainty;
pub use chain::CausalChain;
pub use concept::ConceptNode;
pub use event::ExperienceEvent;
pub use insight::{Insight, Severity};
pub use predicate::PredicateCatalog;
pub use proposition::{KnowledgeThread, Proposition};
pub use relation::RelationRecord;
