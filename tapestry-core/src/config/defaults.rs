//! Default configuration values.

/// Maximum number of links in a derived chain.
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 5;

/// Chains below this aggregate certainty are discarded before matching.
pub const DEFAULT_MIN_AGGREGATE_CERTAINTY: f64 = 0.1;

/// Per-cycle producer deadline (milliseconds).
pub const DEFAULT_PRODUCER_DEADLINE_MS: u64 = 2_000;

/// Maximum number of cache entries before eviction kicks in.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Cache entries older than this are treated as absent and refetched.
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 3_600;

/// Read connections for a file-backed store.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
