//! Hellas Format
//!
//! Text formatting helpers for consoles and logs.
//!
//! # Core Concepts
//!
//! - [`Color`]: Named ANSI colors and escape sequences
//! - [`TableFormat`]: `|{name:width...}|` column layouts with headers and rows
//! - [`Dhms`]: Seconds broken into days, hours, minutes and seconds
//! - [`dates`]: Common strftime layouts
//! - [`group_thousands`] / [`pretty_json`]: number and JSON rendering

#![warn(unreachable_pub)]

mod color;
pub mod dates;
mod dhms;
mod error;
mod numbers;
mod pretty;
mod table;

pub use color::{Color, RESET};
pub use dhms::Dhms;
pub use error::{FormatError, FormatResult};
pub use numbers::group_thousands;
pub use pretty::pretty_json;
pub use table::{format_header, ColumnKind, ColumnSpec, TableFormat};
