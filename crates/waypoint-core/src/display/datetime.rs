//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM TZ` in the given zone.
pub struct LocalDateTime<'a> {
    pub instant: &'a Timestamp,
    pub tz: &'a TimeZone,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(instant: &'a Timestamp, tz: &'a TimeZone) -> Self {
        Self { instant, tz }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.instant
                .to_zoned(self.tz.clone())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
