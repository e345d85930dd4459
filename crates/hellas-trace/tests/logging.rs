//! Subscriber output through the console and file layers

use hellas_trace::{build_subscriber, LogLevel, LogRotation, LoggerConfig, TraceError};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn console_writer(captured: &Captured) -> impl Fn() -> Captured + Send + Sync + 'static {
    let captured = captured.clone();
    move || captured.clone()
}

#[test]
fn console_lines_are_painted_by_level() {
    let captured = Captured::default();
    let config = LoggerConfig::new().with_console_level(Some(LogLevel::Debug));
    let subscriber = build_subscriber(&config, console_writer(&captured)).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("all good");
        tracing::error!("broken");
    });

    let text = captured.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("\x1b[0;32m"));
    assert!(lines[0].contains("all good"));
    assert!(lines[0].ends_with("\x1b[0m"));
    assert!(lines[1].starts_with("\x1b[0;31m"));
    assert!(lines[1].contains("broken"));
}

#[test]
fn console_level_filters_events() {
    let captured = Captured::default();
    let config = LoggerConfig::new()
        .with_console_level(Some(LogLevel::Warn))
        .with_colors(false);
    let subscriber = build_subscriber(&config, console_writer(&captured)).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("hidden");
        tracing::warn!("shown");
    });

    let text = captured.text();
    assert!(!text.contains("hidden"));
    assert!(text.contains("shown"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn directives_narrow_the_output() {
    let captured = Captured::default();
    let config = LoggerConfig::new()
        .with_colors(false)
        .with_filter("error");
    let subscriber = build_subscriber(&config, console_writer(&captured)).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("quiet");
        tracing::error!("loud");
    });

    let text = captured.text();
    assert!(!text.contains("quiet"));
    assert!(text.contains("loud"));
}

#[test]
fn bad_directive_is_rejected() {
    let config = LoggerConfig::new().with_filter("hellas=loud");
    let result = build_subscriber(&config, io::sink);
    assert!(matches!(result, Err(TraceError::BadDirective(_))));
}

#[test]
fn file_receives_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let config = LoggerConfig::new()
        .with_console_level(None)
        .with_file(&path, LogLevel::Info)
        .with_rotation(LogRotation::Never, None);
    let subscriber = build_subscriber(&config, io::sink).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("skipped");
        tracing::info!(items = 3, "stored");
    });

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "stored");
    assert_eq!(event["fields"]["items"], 3);
}

#[test]
fn daily_rotation_names_files_by_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggerConfig::new()
        .with_console_level(None)
        .with_file(dir.path().join("app.log"), LogLevel::Debug)
        .with_rotation(LogRotation::Daily, Some(3));
    let subscriber = build_subscriber(&config, io::sink).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("rolled");
    });

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1, "{names:?}");
    assert!(names[0].starts_with("app.log."), "{}", names[0]);

    let contents = std::fs::read_to_string(dir.path().join(&names[0])).unwrap();
    assert!(contents.contains("rolled"));
}

#[test]
fn unusable_directory_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("app.log");
    let config = LoggerConfig::new().with_file(&path, LogLevel::Debug);
    match build_subscriber(&config, io::sink) {
        Err(TraceError::Appender { path: reported, .. }) => assert_eq!(reported, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected the log file to be unusable"),
    }
}
