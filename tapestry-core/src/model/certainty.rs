use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Certainty score clamped to [0.0, 1.0].
/// Represents how strongly a relation is believed to hold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Certainty(f64);

impl Certainty {
    /// Create a new Certainty, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a Certainty, rejecting values outside [0.0, 1.0].
    /// Used at the upsert boundary where out-of-range input is an error,
    /// not something to silently clamp.
    pub fn try_new(value: f64) -> Result<Self, GraphError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(GraphError::CertaintyOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Saturating accumulation: `w + c * (1 - w)`.
    /// Repeated reinforcement asymptotically approaches 1.0 but never
    /// exceeds it.
    pub fn reinforce(self, observation: Certainty) -> Self {
        Self::new(self.0 + observation.0 * (1.0 - self.0))
    }
}

impl Default for Certainty {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Certainty {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Certainty> for f64 {
    fn from(c: Certainty) -> Self {
        c.0
    }
}
