//! Gather: query all producers concurrently with a shared deadline.
//!
//! This is the only fan-out point and the only place a cycle blocks on
//! external work. Producers that miss the deadline are skipped: their
//! absence is not an error, and late results are discarded with the
//! abandoned task handles.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use tapestry_core::errors::{TapestryResult, WeaveError};
use tapestry_core::model::KnowledgeThread;
use tapestry_core::traits::{CycleContext, PropositionProducer};

/// What the gather step came back with.
pub struct GatherOutcome {
    pub threads: Vec<KnowledgeThread>,
    /// Sources skipped this cycle (timeout or failure).
    pub skipped: Vec<String>,
}

/// Fan out to every producer on a blocking task; collect whatever returns
/// before the shared deadline. No producer failure aborts gathering from
/// the others.
pub async fn gather(
    producers: &[Arc<dyn PropositionProducer>],
    ctx: &CycleContext,
) -> GatherOutcome {
    let started = tokio::time::Instant::now();

    let handles: Vec<(String, JoinHandle<TapestryResult<KnowledgeThread>>)> = producers
        .iter()
        .map(|producer| {
            let producer = Arc::clone(producer);
            let ctx = ctx.clone();
            let source = producer.source().to_string();
            let handle = tokio::task::spawn_blocking(move || producer.produce(&ctx));
            (source, handle)
        })
        .collect();

    let mut threads = Vec::new();
    let mut skipped = Vec::new();

    // Tasks already run concurrently; awaiting them in order under the
    // remaining budget implements the shared deadline.
    for (source, handle) in handles {
        let remaining = ctx.deadline.saturating_sub(started.elapsed());
        match tokio::time::timeout(remaining, handle).await {
            Ok(Ok(Ok(thread))) => threads.push(thread),
            Ok(Ok(Err(e))) => {
                let err = WeaveError::ProducerFailed {
                    producer: source.clone(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "producer failed, skipping for this cycle");
                skipped.push(source);
            }
            Ok(Err(join_err)) => {
                let err = WeaveError::ProducerFailed {
                    producer: source.clone(),
                    reason: join_err.to_string(),
                };
                warn!(error = %err, "producer task panicked, skipping for this cycle");
                skipped.push(source);
            }
            Err(_elapsed) => {
                info!(producer = %source, "producer missed the cycle deadline, skipping");
                skipped.push(source);
            }
        }
    }

    GatherOutcome { threads, skipped }
}
