//! Error types for formatting helpers

/// Errors raised while parsing layouts or rendering values
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Color name not in the table
    #[error("unknown color: '{0}'")]
    UnknownColor(String),

    /// Column layout could not be parsed
    #[error("invalid format spec '{spec}': {reason}")]
    InvalidSpec {
        /// Offending layout or column spec
        spec: String,
        /// What could not be parsed
        reason: String,
    },

    /// Row is missing a column's field
    #[error("missing field: '{0}'")]
    MissingField(String),

    /// Field value does not match the column type
    #[error("field '{field}' is not {expected}")]
    TypeMismatch {
        /// Column name
        field: String,
        /// Kind of value the column formats
        expected: &'static str,
    },

    /// JSON encoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered bytes were not UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl FormatError {
    /// Create invalid spec error
    pub fn invalid_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
