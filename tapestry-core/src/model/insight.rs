use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::chain::CausalChain;
use crate::errors::PatternError;

/// How much a matched chain matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warn,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Danger => "danger",
        }
    }
}

impl FromStr for Severity {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "danger" => Ok(Self::Danger),
            other => Err(PatternError::UnknownSeverity {
                name: String::new(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured alert raised when a chain matches a registered pattern.
/// Consumed immediately by the external reasoning layer; not retained here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub pattern_name: String,
    pub chain: CausalChain,
    pub severity: Severity,
    pub suggested_action: String,
}
