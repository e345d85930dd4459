//! Subscriber assembly

use crate::colored::ColoredFormat;
use crate::config::LoggerConfig;
use crate::error::{TraceError, TraceResult};
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Build a subscriber for `config`, printing console lines to `console`
///
/// The console gets plain (optionally colored) text, the file gets one
/// JSON object per event appended to `file_path`, rolled over as set by
/// `rotation` and pruned to `max_files`.
///
/// # Errors
/// Returns error if the filter directives do not parse or the log file
/// cannot be opened
pub fn build_subscriber<W>(
    config: &LoggerConfig,
    console: W,
) -> TraceResult<impl Subscriber + Send + Sync + 'static>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let directives = config
        .filter
        .as_deref()
        .map(EnvFilter::try_new)
        .transpose()?;

    let location = config.show_location();
    let threads = config.show_threads();

    let console_layer = config.console_level.map(|level| {
        let event_format = fmt::format()
            .with_ansi(false)
            .with_file(location)
            .with_line_number(location)
            .with_thread_ids(threads)
            .with_thread_names(threads);
        fmt::layer()
            .with_ansi(false)
            .with_writer(console)
            .event_format(ColoredFormat::new(event_format, config.colored))
            .with_filter(LevelFilter::from(level))
    });

    let file_layer = match (&config.file_path, config.file_level) {
        (Some(path), Some(level)) => {
            let appender = rolling_appender(config, path)?;
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_file(location)
                .with_line_number(location)
                .with_thread_ids(threads)
                .with_thread_names(threads)
                .with_writer(appender)
                .with_filter(LevelFilter::from(level));
            Some(layer)
        }
        _ => None,
    };

    Ok(Registry::default()
        .with(directives)
        .with(console_layer)
        .with(file_layer))
}

/// Rolling writer for `path`: its directory holds the files, its file name
/// is their prefix
fn rolling_appender(config: &LoggerConfig, path: &Path) -> TraceResult<RollingFileAppender> {
    let prefix = path.file_name().ok_or_else(|| {
        TraceError::io_error(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"),
        )
    })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(prefix.to_string_lossy());
    if let Some(max_files) = config.max_files {
        builder = builder.max_log_files(max_files);
    }
    builder
        .build(directory)
        .map_err(|source| TraceError::appender(path, source))
}

/// Install the subscriber for `config` globally, console on stderr
///
/// # Errors
/// Returns error if the subscriber cannot be built or a global subscriber
/// is already set
pub fn init(config: &LoggerConfig) -> TraceResult<()> {
    build_subscriber(config, std::io::stderr)?.try_init()?;
    tracing::debug!(
        max_level = ?config.max_level(),
        file = ?config.file_path,
        "logging initialized"
    );
    Ok(())
}
