//! Codec errors

use std::path::PathBuf;

/// Errors from compression and encoding
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input exceeds the configured size cap
    #[error("input is too big ({size_mb:.2} MB, limit {limit_mb} MB)")]
    FileTooBig {
        /// MB read before giving up (reading stops one byte past the limit)
        size_mb: f64,
        /// Configured limit in MB
        limit_mb: u64,
    },

    /// Character outside the base62 alphabet, or value too large for u64
    #[error("invalid base62 input {input:?}: {reason}")]
    InvalidBase62 {
        /// Rejected text
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// File could not be read
    #[error("io error reading {path}: {source}")]
    File {
        /// File that was read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Stream or (de)compression failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Create base62 error
    pub fn invalid_base62(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidBase62 {
            input: input.into(),
            reason,
        }
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
