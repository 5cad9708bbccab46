//! Pattern step: bounded-depth chain derivation.
//!
//! Seeds are the relations touched this cycle. A chain extends along
//! outgoing causal predicates through shared concepts; a non-causal
//! predicate, the length bound, or a revisited concept stops it. Reads go
//! through the store so traversal refreshes relation recency.

use std::collections::HashSet;

use tracing::debug;

use tapestry_core::config::WeaverConfig;
use tapestry_core::errors::TapestryResult;
use tapestry_core::model::{CausalChain, ConceptNode, PredicateCatalog, RelationRecord};
use tapestry_core::traits::{Direction, IConceptGraph};

/// Derives chains from a set of seed relations.
pub struct ChainWeaver<'a> {
    store: &'a dyn IConceptGraph,
    catalog: &'a PredicateCatalog,
    max_length: usize,
    min_certainty: f64,
}

impl<'a> ChainWeaver<'a> {
    pub fn new(store: &'a dyn IConceptGraph, config: &'a WeaverConfig) -> Self {
        Self {
            store,
            catalog: &config.predicates,
            max_length: config.effective_max_chain_length(),
            min_certainty: config.min_aggregate_certainty,
        }
    }

    /// Derive the surviving chains for this cycle: maximal paths from each
    /// causal seed, minus chains below the certainty floor, minus chains
    /// that are sub-chains of a longer survivor.
    pub fn derive(&self, seeds: &[RelationRecord]) -> TapestryResult<Vec<CausalChain>> {
        let mut raw = Vec::new();
        for seed in seeds {
            // A taxonomic seed can never extend, and alone it is not a
            // causal path.
            if !self.catalog.is_causal(&seed.predicate) {
                continue;
            }
            let mut visited: HashSet<ConceptNode> =
                [seed.subject.clone(), seed.object.clone()].into();
            let mut links = vec![seed.clone()];
            self.extend(&mut links, &mut visited, &mut raw)?;
        }

        raw.retain(|c| c.aggregate_certainty() >= self.min_certainty);

        // Suppress chains fully contained in a longer survivor: the seed
        // of a mid-chain relation re-derives the tail of a path another
        // seed already produced.
        let survivors: Vec<CausalChain> = raw
            .iter()
            .filter(|c| {
                !raw.iter()
                    .any(|other| other.len() > c.len() && other.contains_chain(c))
            })
            .cloned()
            .collect();

        debug!(
            seeds = seeds.len(),
            raw = raw.len(),
            chains = survivors.len(),
            "chain derivation"
        );
        Ok(survivors)
    }

    fn extend(
        &self,
        links: &mut Vec<RelationRecord>,
        visited: &mut HashSet<ConceptNode>,
        out: &mut Vec<CausalChain>,
    ) -> TapestryResult<()> {
        let Some(last) = links.last() else {
            return Ok(());
        };
        if links.len() >= self.max_length {
            out.push(CausalChain::new(links.clone()));
            return Ok(());
        }

        let frontier = self.store.neighbors(&last.object, Direction::Outgoing)?;
        let mut extended = false;
        for next in frontier {
            if !self.catalog.is_causal(&next.predicate) {
                continue;
            }
            // A concept may not appear twice in one chain.
            if visited.contains(&next.object) {
                continue;
            }
            extended = true;
            visited.insert(next.object.clone());
            links.push(next.clone());
            self.extend(links, visited, out)?;
            links.pop();
            visited.remove(&next.object);
        }

        if !extended {
            out.push(CausalChain::new(links.clone()));
        }
        Ok(())
    }
}
