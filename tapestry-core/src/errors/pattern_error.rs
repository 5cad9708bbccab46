/// Pattern registry errors. All raised at registry load time; a scan over a
/// loaded registry never fails.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern name must be non-empty")]
    EmptyName,

    #[error("pattern {name} has an empty predicate sequence")]
    EmptySequence { name: String },

    #[error("pattern {name} has unknown severity {value}")]
    UnknownSeverity { name: String, value: String },

    #[error("pattern {name} has unknown match mode {value}")]
    UnknownMatchMode { name: String, value: String },

    #[error("pattern file invalid: {message}")]
    InvalidFile { message: String },
}
