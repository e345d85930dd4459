//! Days / hours / minutes / seconds breakdown

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// A span of whole seconds split into days, hours, minutes and seconds
///
/// Displays as `DDD-HH:MM:SS`; serializes as a mapping of the four parts.
///
/// # Example
/// ```rust
/// use hellas_format::Dhms;
///
/// assert_eq!(Dhms::from_secs(60 * 60 * 24).to_string(), "001-00:00:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Dhms {
    /// Whole days
    pub days: u64,
    /// Hours, 0 to 23
    pub hours: u8,
    /// Minutes, 0 to 59
    pub minutes: u8,
    /// Seconds, 0 to 59
    pub seconds: u8,
}

impl Dhms {
    /// Split a number of seconds
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            days: secs / DAY,
            // Each remainder is below 60 (or 24), so the casts are lossless
            hours: ((secs / HOUR) % 24) as u8,
            minutes: ((secs / MINUTE) % 60) as u8,
            seconds: (secs % 60) as u8,
        }
    }

    /// Total number of seconds
    #[must_use]
    pub const fn total_secs(&self) -> u64 {
        self.days * DAY
            + self.hours as u64 * HOUR
            + self.minutes as u64 * MINUTE
            + self.seconds as u64
    }
}

impl From<Duration> for Dhms {
    /// Sub-second precision is dropped
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs())
    }
}

impl From<Dhms> for Duration {
    fn from(dhms: Dhms) -> Self {
        Duration::from_secs(dhms.total_secs())
    }
}

impl Display for Dhms {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day() {
        let d = Dhms::from_secs(DAY);
        assert_eq!(
            d,
            Dhms {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
        assert_eq!(d.to_string(), "001-00:00:00");
    }

    #[test]
    fn mixed_parts() {
        let d = Dhms::from_secs(2 * DAY + 3 * HOUR + 4 * MINUTE + 5);
        assert_eq!(d.to_string(), "002-03:04:05");
        assert_eq!(d.total_secs(), 2 * DAY + 3 * HOUR + 4 * MINUTE + 5);
    }

    #[test]
    fn from_duration_truncates() {
        let d = Dhms::from(Duration::from_millis(61_900));
        assert_eq!(d.to_string(), "000-00:01:01");
        assert_eq!(Duration::from(d), Duration::from_secs(61));
    }

    #[test]
    fn mapping_form() {
        let json = serde_json::to_value(Dhms::from_secs(DAY)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "days": 1, "hours": 0, "minutes": 0, "seconds": 0 })
        );
    }
}
