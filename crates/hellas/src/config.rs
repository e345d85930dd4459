//! Aggregated configuration
//!
//! Every section is optional; missing keys take their defaults.
//!
//! ```toml
//! [logging]
//! console_level = "info"
//! file_path = "/var/log/app.log"
//! file_level = "debug"
//!
//! [retry]
//! retries = 5
//! delay_ms = 250
//!
//! [codec]
//! level = 9
//! ```

use crate::error::{HellasError, HellasResult};
use hellas_codec::{Codec, CodecConfig};
use hellas_trace::{LoggerConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for logging, retries and compression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HellasConfig {
    /// Logger outputs and levels
    pub logging: LoggerConfig,
    /// Retry policy for fallible operations
    pub retry: RetryPolicy,
    /// Compression settings
    pub codec: CodecConfig,
}

impl HellasConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or a value has the wrong
    /// type
    pub fn from_toml_str(text: &str) -> HellasResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse
    pub fn from_file(path: impl AsRef<Path>) -> HellasResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HellasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With logging configuration
    #[inline]
    #[must_use]
    pub fn with_logging(mut self, logging: LoggerConfig) -> Self {
        self.logging = logging;
        self
    }

    /// With retry policy
    #[inline]
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// With compression settings
    #[inline]
    #[must_use]
    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }

    /// Codec using these compression settings
    #[inline]
    #[must_use]
    pub fn codec(&self) -> Codec {
        Codec::new(self.codec)
    }

    /// Install the global logger described by `logging`
    ///
    /// # Errors
    /// Returns error if the logger cannot be built or one is already set
    pub fn init_logging(&self) -> HellasResult<()> {
        hellas_trace::init(&self.logging)?;
        Ok(())
    }
}
