//! Hellas Trace
//!
//! Logging setup for binaries and tests built on the Hellas crates.
//!
//! - [`LoggerConfig`]: What to log where (console and/or a JSON file)
//! - [`ColoredFormat`]: Event formatter painting each line by level
//! - [`build_subscriber`] / [`init`]: Assemble and install the subscriber
//! - [`RetryPolicy`]: Re-run fallible operations with growing pauses
//!
//! ## Filtering
//! Each output has its own minimum level. An optional directive string
//! (same syntax as `RUST_LOG`) filters both:
//! ```toml
//! console_level = "info"
//! file_level = "debug"
//! file_path = "/var/log/app.log"
//! rotation = "daily"
//! max_files = 7
//! filter = "hellas_tree=trace,warn"
//! ```

#![warn(unreachable_pub)]

mod colored;
mod config;
mod error;
mod retry;
mod subscriber;

pub use colored::{level_color, ColoredFormat};
pub use config::{LogLevel, LogRotation, LoggerConfig};
pub use error::{TraceError, TraceResult};
pub use retry::RetryPolicy;
pub use subscriber::{build_subscriber, init};
