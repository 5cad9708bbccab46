use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::TapestryResult;
use crate::model::KnowledgeThread;

/// Per-cycle context handed to every producer.
#[derive(Debug, Clone)]
pub struct CycleContext {
    pub cycle_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Shared gather deadline. A producer that has not returned by then is
    /// skipped for the cycle.
    pub deadline: Duration,
}

impl CycleContext {
    pub fn new(deadline: Duration) -> Self {
        Self {
            cycle_id: Uuid::new_v4(),
            started_at: Utc::now(),
            deadline,
        }
    }
}

/// Capability contract for external perception/reasoning modules.
///
/// `produce` is a blocking call; the weaver drives it on a blocking task
/// under the shared deadline. An error skips only this producer and never
/// aborts gathering from the others.
pub trait PropositionProducer: Send + Sync {
    /// Stable identifier, used in logs and skip reports.
    fn source(&self) -> &str;

    /// Produce this cycle's knowledge thread. A thread with zero facts is
    /// valid and contributes nothing.
    fn produce(&self, ctx: &CycleContext) -> TapestryResult<KnowledgeThread>;
}
