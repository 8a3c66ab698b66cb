//! Observability error model.

use thiserror::Error;

/// Result type used by the observability setup.
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// The requested log format is not one of `json`, `pretty`, `compact`.
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    /// The filter directive could not be parsed.
    #[error("invalid filter directive `{directive}`: {reason}")]
    InvalidFilter { directive: String, reason: String },
}

impl ObservabilityError {
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat(format.into())
    }

    pub fn invalid_filter(directive: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidFilter {
            directive: directive.into(),
            reason: reason.to_string(),
        }
    }
}
