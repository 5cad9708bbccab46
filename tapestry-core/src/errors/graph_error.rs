/// Concept graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid relation: {reason}")]
    InvalidRelation { reason: String },

    #[error("certainty {value} outside [0, 1]")]
    CertaintyOutOfRange { value: f64 },

    #[error("concept name must be non-empty")]
    EmptyConcept,

    #[error("predicate must be non-empty")]
    EmptyPredicate,

    #[error("graph store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl GraphError {
    /// Rejections are malformed-input errors: the single proposition is
    /// skipped and the cycle continues. `StoreUnavailable` is not a
    /// rejection; it aborts the cycle.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::StoreUnavailable { .. })
    }
}
