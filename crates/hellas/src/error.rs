//! Facade errors

use std::path::PathBuf;

/// Errors from loading configuration and applying it
#[derive(Debug, thiserror::Error)]
pub enum HellasError {
    /// Configuration text is not valid TOML for [`crate::HellasConfig`]
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Configuration file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Logging could not be set up
    #[error(transparent)]
    Trace(#[from] hellas_trace::TraceError),
}

/// Result type alias for the facade
pub type HellasResult<T> = Result<T, HellasError>;
