//! Knot: absorb every gathered proposition into the graph.
//!
//! The only graph-mutating step of a cycle; producers never write the
//! store directly. A rejected proposition (malformed input) is skipped
//! and counted; a store failure aborts the cycle.

use tracing::debug;

use tapestry_core::errors::TapestryResult;
use tapestry_core::model::KnowledgeThread;
use tapestry_core::traits::IConceptGraph;

/// Counts from the merge step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOutcome {
    pub merged: usize,
    pub skipped: usize,
}

pub fn knot(store: &dyn IConceptGraph, threads: &[KnowledgeThread]) -> TapestryResult<MergeOutcome> {
    let mut outcome = MergeOutcome::default();
    for thread in threads {
        // A thread with zero facts contributes nothing; not an error.
        for fact in &thread.facts {
            let result = store.upsert_relation(
                &fact.subject,
                &fact.predicate,
                &fact.object,
                fact.certainty,
                &fact.source_context,
            );
            match result {
                Ok(_) => outcome.merged += 1,
                Err(e) if e.is_rejection() => {
                    debug!(source = %thread.source, error = %e, "proposition rejected");
                    outcome.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(outcome)
}
