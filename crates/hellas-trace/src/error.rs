//! Error in the logging setup

use std::path::PathBuf;

/// Errors raised while building or installing a subscriber
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// A global subscriber is already installed
    #[error(transparent)]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),

    /// Filter directive did not parse
    #[error(transparent)]
    BadDirective(#[from] tracing_subscriber::filter::ParseError),

    /// Log file path is unusable
    #[error("io error opening {path}: {source}")]
    Io {
        /// Configured log file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Rolling log file could not be created
    #[error("cannot create rolling log {path}: {source}")]
    Appender {
        /// Configured log file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: tracing_appender::rolling::InitError,
    },
}

impl TraceError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create rolling appender error for path
    pub fn appender(
        path: impl Into<PathBuf>,
        source: tracing_appender::rolling::InitError,
    ) -> Self {
        Self::Appender {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for logging setup
pub type TraceResult<T> = Result<T, TraceError>;
