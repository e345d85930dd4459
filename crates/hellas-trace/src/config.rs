//! Logger configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::LevelFilter;

/// Minimum level of an output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including fine-grained tracing
    Trace,
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Recoverable problems
    Warn,
    /// Failures only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from_level(level.into())
    }
}

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// New file every minute
    Minutely,
    /// New file every hour
    Hourly,
    /// New file every day at midnight UTC
    #[default]
    Daily,
    /// Single file, never rolled
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Rotation::MINUTELY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Where and how much to log
///
/// An output is disabled when its level is `None`; the file output also
/// needs a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level printed to the console
    pub console_level: Option<LogLevel>,
    /// Minimum level appended to the log file
    pub file_level: Option<LogLevel>,
    /// Log file, written as one JSON object per line
    ///
    /// When rotated, the file name is the prefix of each rolled file
    /// (`app.log` becomes `app.log.2026-10-19`).
    pub file_path: Option<PathBuf>,
    /// Roll-over period of the log file
    pub rotation: LogRotation,
    /// Rolled files to keep; older ones are deleted (`None` keeps all)
    pub max_files: Option<usize>,
    /// 1: message only; 2: adds file and line; 3: adds thread ids and names
    pub verbosity: u8,
    /// Paint console lines by level
    pub colored: bool,
    /// Extra filter directives in `RUST_LOG` syntax
    pub filter: Option<String>,
}

impl LoggerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With console level (`None` disables the console)
    #[inline]
    #[must_use]
    pub fn with_console_level(mut self, level: Option<LogLevel>) -> Self {
        self.console_level = level;
        self
    }

    /// With a log file at `level`
    #[inline]
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, level: LogLevel) -> Self {
        self.file_path = Some(path.into());
        self.file_level = Some(level);
        self
    }

    /// With roll-over period and number of rolled files to keep
    #[inline]
    #[must_use]
    pub fn with_rotation(mut self, rotation: LogRotation, max_files: Option<usize>) -> Self {
        self.rotation = rotation;
        self.max_files = max_files;
        self
    }

    /// With verbosity
    #[inline]
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// With or without console colors
    #[inline]
    #[must_use]
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// With filter directives
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    /// Whether the file output is active
    #[inline]
    #[must_use]
    pub fn file_enabled(&self) -> bool {
        self.file_path.is_some() && self.file_level.is_some()
    }

    /// Most verbose level across the active outputs
    #[must_use]
    pub fn max_level(&self) -> Option<LogLevel> {
        let file = if self.file_enabled() {
            self.file_level
        } else {
            None
        };
        match (self.console_level, file) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub(crate) fn show_location(&self) -> bool {
        self.verbosity > 1
    }

    pub(crate) fn show_threads(&self) -> bool {
        self.verbosity > 2
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console_level: Some(LogLevel::Debug),
            file_level: Some(LogLevel::Debug),
            file_path: None,
            rotation: LogRotation::Daily,
            max_files: Some(7),
            verbosity: 1,
            colored: true,
            filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_debug_to_console_only() {
        let config = LoggerConfig::default();
        assert_eq!(config.console_level, Some(LogLevel::Debug));
        assert!(!config.file_enabled());
        assert_eq!(config.max_level(), Some(LogLevel::Debug));
    }

    #[test]
    fn max_level_takes_most_verbose() {
        let config = LoggerConfig::new()
            .with_console_level(Some(LogLevel::Warn))
            .with_file("app.log", LogLevel::Trace);
        assert_eq!(config.max_level(), Some(LogLevel::Trace));

        let quiet = LoggerConfig::new().with_console_level(None);
        assert_eq!(quiet.max_level(), None);
    }

    #[test]
    fn verbosity_switches() {
        let config = LoggerConfig::new().with_verbosity(3);
        assert!(config.show_location());
        assert!(config.show_threads());
        assert!(!LoggerConfig::new().show_location());
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: LoggerConfig = toml::from_str(
            r#"
            console_level = "info"
            file_path = "/tmp/app.log"
            colored = false
            "#,
        )
        .unwrap();
        assert_eq!(config.console_level, Some(LogLevel::Info));
        assert_eq!(config.file_level, Some(LogLevel::Debug));
        assert!(config.file_enabled());
        assert!(!config.colored);
        assert_eq!(config.verbosity, 1);
        assert_eq!(config.rotation, LogRotation::Daily);
        assert_eq!(config.max_files, Some(7));
    }

    #[test]
    fn rotation_from_toml() {
        let config: LoggerConfig = toml::from_str("rotation = \"hourly\"\nmax_files = 24\n").unwrap();
        assert_eq!(config.rotation, LogRotation::Hourly);
        assert_eq!(config.max_files, Some(24));
        assert_eq!(Rotation::from(LogRotation::Never), Rotation::NEVER);
    }

    #[test]
    fn level_conversions() {
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    }
}
