//! Common date/time layouts
//!
//! All layouts are chrono strftime strings.

use chrono::{DateTime, Utc};

/// `Tue, 15 Nov 1994 08:12:31 GMT`
pub const FMT_HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";
/// `Tue, 15 Nov 1994 08:12:31 +0000`
pub const FMT_RFC_2822_DATE: &str = "%a, %d %b %Y %H:%M:%S +0000";
/// Generic date and time, `941115 08:12:31`
pub const FMT_DT_GENERIC: &str = "%y%m%d %H:%M:%S";
/// Generic time, `08:12:31`
pub const FMT_T_GENERIC: &str = "%H:%M:%S";
/// Compressed date, time, microseconds, ISO week and weekday
pub const FMT_DT_COMPR: &str = "%y%m%d%H%M%S%6f%V%u";
/// Compressed date, time, ISO week and weekday
pub const FMT_DT_COMPR_SI: &str = "%y%m%d%H%M%S%V%u";
/// Compressed up to seconds
pub const FMT_DT_COMPR_S: &str = "%y%m%d%H%M%S";
/// Compressed up to minutes
pub const FMT_DT_COMPR_M: &str = "%y%m%d%H%M";
/// Compressed up to hours
pub const FMT_DT_COMPR_H: &str = "%y%m%d%H";

/// Render a UTC timestamp as an HTTP date
#[must_use]
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format(FMT_HTTP_DATE).to_string()
}

/// Render a UTC timestamp with a layout
#[must_use]
pub fn format_utc(at: DateTime<Utc>, layout: &str) -> String {
    at.format(layout).to_string()
}
