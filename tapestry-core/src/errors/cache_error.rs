/// Content cache errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The external fetch failed. Nothing is stored, so repeated failures
    /// are not suppressed by negative caching.
    #[error("fetch failed for {locator}: {reason}")]
    FetchFailed { locator: String, reason: String },
}
