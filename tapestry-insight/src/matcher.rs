//! Scans derived chains against the registry and emits insights.

use tracing::debug;

use tapestry_core::model::{CausalChain, Insight};

use crate::registry::{MatchMode, Pattern, PatternRegistry};

/// Evaluates every registered pattern against every chain. A chain may
/// match zero, one, or several patterns; each (chain, pattern) pair is
/// evaluated exactly once per scan, so insights are already deduplicated
/// at that granularity. Emission order follows registration order within
/// a chain.
pub struct InsightMatcher {
    registry: PatternRegistry,
}

impl InsightMatcher {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// Scan never fails: malformed patterns were rejected at load time.
    pub fn scan(&self, chains: &[CausalChain]) -> Vec<Insight> {
        let mut insights = Vec::new();
        for chain in chains {
            let predicates = chain.predicates();
            for pattern in self.registry.patterns() {
                if matches(pattern, &predicates) {
                    debug!(
                        pattern = %pattern.name,
                        chain_len = chain.len(),
                        "pattern matched"
                    );
                    insights.push(Insight {
                        pattern_name: pattern.name.clone(),
                        chain: chain.clone(),
                        severity: pattern.severity,
                        suggested_action: pattern.suggested_action.clone(),
                    });
                }
            }
        }
        insights
    }
}

fn matches(pattern: &Pattern, chain_predicates: &[&str]) -> bool {
    let template: Vec<&str> = pattern.sequence.iter().map(String::as_str).collect();
    match pattern.mode {
        MatchMode::Exact => chain_predicates == template.as_slice(),
        MatchMode::Suffix => {
            chain_predicates.len() >= template.len()
                && chain_predicates[chain_predicates.len() - template.len()..] == template[..]
        }
        MatchMode::OneSkip => matches_with_one_skip(chain_predicates, &template),
    }
}

/// True when the template matches a run of the chain starting anywhere,
/// with at most one chain step skipped inside the run.
fn matches_with_one_skip(chain: &[&str], template: &[&str]) -> bool {
    if template.is_empty() || template.len() > chain.len() {
        return false;
    }
    (0..chain.len()).any(|start| run_matches(&chain[start..], template, 1))
}

fn run_matches(chain: &[&str], template: &[&str], skips_left: usize) -> bool {
    let Some((head, rest_template)) = template.split_first() else {
        return true;
    };
    let Some((step, rest_chain)) = chain.split_first() else {
        return false;
    };
    if step == head && run_matches(rest_chain, rest_template, skips_left) {
        return true;
    }
    skips_left > 0 && run_matches(rest_chain, template, skips_left - 1)
}
