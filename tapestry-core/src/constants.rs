/// Tapestry system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on chain length regardless of configuration.
pub const MAX_CHAIN_HARD_CAP: usize = 32;

/// Epsilon added to entry age when computing cache eviction scores,
/// so a zero-age entry never divides by zero.
pub const EVICTION_EPSILON_SECS: f64 = 1.0;
