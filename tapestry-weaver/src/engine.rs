//! SynthesisEngine: the single external entry point. One `run_cycle`
//! call is one gather → knot → pattern → scan pass.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use tapestry_core::config::WeaverConfig;
use tapestry_core::errors::TapestryResult;
use tapestry_core::model::{CausalChain, Insight};
use tapestry_core::traits::{CycleContext, IConceptGraph, PropositionProducer};
use tapestry_insight::{InsightMatcher, PatternRegistry};

use crate::chains::ChainWeaver;
use crate::gather;
use crate::merge;

/// Everything one cycle produced.
#[derive(Debug)]
pub struct CycleOutcome {
    pub cycle_id: Uuid,
    pub chains: Vec<CausalChain>,
    pub insights: Vec<Insight>,
    /// Producers that timed out or failed this cycle.
    pub skipped_producers: Vec<String>,
    /// Propositions rejected as malformed during the merge.
    pub skipped_propositions: usize,
    pub merged_propositions: usize,
}

/// Owns the store handle, the configuration, and the insight matcher.
/// `run_cycle` takes `&mut self`: cycles are strictly sequential at the
/// store level.
pub struct SynthesisEngine {
    store: Arc<dyn IConceptGraph>,
    config: WeaverConfig,
    matcher: InsightMatcher,
}

impl SynthesisEngine {
    pub fn new(
        store: Arc<dyn IConceptGraph>,
        config: WeaverConfig,
        registry: PatternRegistry,
    ) -> Self {
        Self {
            store,
            config,
            matcher: InsightMatcher::new(registry),
        }
    }

    /// The configured per-cycle deadline, for schedulers that do not pass
    /// their own.
    pub fn default_deadline(&self) -> Duration {
        Duration::from_millis(self.config.producer_deadline_ms)
    }

    /// Run one synthesis cycle. A store failure aborts the cycle and
    /// reports no chains or insights; everything milder is a skip.
    pub async fn run_cycle(
        &mut self,
        producers: &[Arc<dyn PropositionProducer>],
        deadline: Duration,
    ) -> TapestryResult<CycleOutcome> {
        let ctx = CycleContext::new(deadline);
        info!(
            cycle_id = %ctx.cycle_id,
            producers = producers.len(),
            "synthesis cycle start"
        );

        let gathered = gather::gather(producers, &ctx).await;
        let merged = merge::knot(self.store.as_ref(), &gathered.threads)?;

        // Derivation reads only after every merge has committed.
        let seeds = self.store.touched_since(ctx.started_at)?;
        let chains = ChainWeaver::new(self.store.as_ref(), &self.config).derive(&seeds)?;
        let insights = self.matcher.scan(&chains);

        info!(
            cycle_id = %ctx.cycle_id,
            merged = merged.merged,
            skipped = merged.skipped,
            chains = chains.len(),
            insights = insights.len(),
            "synthesis cycle complete"
        );

        Ok(CycleOutcome {
            cycle_id: ctx.cycle_id,
            chains,
            insights,
            skipped_producers: gathered.skipped,
            skipped_propositions: merged.skipped,
            merged_propositions: merged.merged,
        })
    }
}
