/// Synthesis cycle errors.
#[derive(Debug, thiserror::Error)]
pub enum WeaveError {
    /// A producer returned an error or its task panicked. The producer is
    /// skipped for the cycle; this never aborts gathering from the others.
    #[error("producer {producer} failed: {reason}")]
    ProducerFailed { producer: String, reason: String },
}
