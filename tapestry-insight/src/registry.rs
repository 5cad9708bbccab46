//! Pattern registry: configuration records validated at load time.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tapestry_core::errors::{PatternError, TapestryResult};
use tapestry_core::model::Severity;

/// How a pattern's predicate sequence is tested against a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The chain's whole predicate sequence equals the template.
    Exact,
    /// The chain's predicate sequence ends with the template.
    Suffix,
    /// The template appears in order within the chain, tolerating at most
    /// one skipped chain step.
    OneSkip,
}

impl MatchMode {
    fn parse(name: &str, value: &str) -> Result<Self, PatternError> {
        match value {
            "exact" => Ok(Self::Exact),
            "suffix" => Ok(Self::Suffix),
            "one_skip" => Ok(Self::OneSkip),
            other => Err(PatternError::UnknownMatchMode {
                name: name.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// One raw registry record, as it appears in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    pub name: String,
    pub predicates: Vec<String>,
    /// "exact", "suffix", or "one_skip". Defaults to "exact".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// "info", "warn", or "danger".
    pub severity: String,
    pub action: String,
}

fn default_mode() -> String {
    "exact".to_string()
}

/// A validated pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub name: String,
    pub sequence: Vec<String>,
    pub mode: MatchMode,
    pub severity: Severity,
    pub suggested_action: String,
}

/// The loaded set of patterns, in registration order. Immutable once
/// built; external reconfiguration means rebuilding the registry.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    pattern: Vec<PatternEntry>,
}

impl PatternRegistry {
    /// An empty registry is a valid configuration: every scan returns
    /// nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate raw entries into a registry. Any malformed entry fails the
    /// whole load: bad patterns are rejected here, never at scan time.
    pub fn from_entries(entries: Vec<PatternEntry>) -> TapestryResult<Self> {
        let mut patterns = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.name.is_empty() {
                return Err(PatternError::EmptyName.into());
            }
            if entry.predicates.is_empty() {
                return Err(PatternError::EmptySequence { name: entry.name }.into());
            }
            let severity = Severity::from_str(&entry.severity).map_err(|_| {
                PatternError::UnknownSeverity {
                    name: entry.name.clone(),
                    value: entry.severity.clone(),
                }
            })?;
            let mode = MatchMode::parse(&entry.name, &entry.mode)?;
            patterns.push(Pattern {
                name: entry.name,
                sequence: entry.predicates,
                mode,
                severity,
                suggested_action: entry.action,
            });
        }
        Ok(Self { patterns })
    }

    /// Parse a TOML document of `[[pattern]]` tables.
    pub fn from_toml_str(input: &str) -> TapestryResult<Self> {
        let file: RegistryFile = toml::from_str(input).map_err(|e| {
            PatternError::InvalidFile {
                message: e.to_string(),
            }
        })?;
        Self::from_entries(file.pattern)
    }

    pub fn load_from_path(path: &Path) -> TapestryResult<Self> {
        let input = std::fs::read_to_string(path).map_err(|e| PatternError::InvalidFile {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&input)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
