//! Markdown formatting for domain models.
//!
//! Models without timestamps implement [`Display`](fmt::Display) directly.
//! Models with timestamps implement [`ZonedDisplay`] and are printed through
//! [`InZone`], so every time shown in one view uses the same zone.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::LocalDateTime;
use crate::models::{Activity, Link, Participant, Trip, TripSummary};

/// Markdown rendering with timestamps shown in a given zone.
pub trait ZonedDisplay {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, tz: &TimeZone) -> fmt::Result;
}

/// Pairs a model with the zone its timestamps are shown in.
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use waypoint_core::{display::InZone, models::Trip};
///
/// let trip = Trip {
///     id: 1,
///     destination: "Lisboa".to_string(),
///     starts_at: "2030-03-10T12:00:00Z".parse().unwrap(),
///     ends_at: "2030-03-12T12:00:00Z".parse().unwrap(),
///     is_confirmed: false,
///     created_at: "2030-03-01T12:00:00Z".parse().unwrap(),
/// };
///
/// let output = InZone(&trip, &TimeZone::UTC).to_string();
/// assert!(output.contains("- Starts: 2030-03-10 12:00 UTC"));
/// ```
pub struct InZone<'a, T>(pub &'a T, pub &'a TimeZone);

impl<T: ZonedDisplay> fmt::Display for InZone<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_zoned(f, self.1)
    }
}

fn confirmation_icon(confirmed: bool) -> &'static str {
    if confirmed {
        "✓ Confirmed"
    } else {
        "○ Pending"
    }
}

impl ZonedDisplay for Trip {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, tz: &TimeZone) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.destination)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", confirmation_icon(self.is_confirmed))?;
        writeln!(f, "- Starts: {}", LocalDateTime::new(&self.starts_at, tz))?;
        writeln!(f, "- Ends: {}", LocalDateTime::new(&self.ends_at, tz))?;
        writeln!(f, "- Created: {}", LocalDateTime::new(&self.created_at, tz))
    }
}

impl ZonedDisplay for TripSummary {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, tz: &TimeZone) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{} confirmed)",
            self.destination, self.id, self.confirmed_participants, self.total_participants
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", confirmation_icon(self.is_confirmed))?;
        writeln!(
            f,
            "- **Dates**: {} → {}",
            LocalDateTime::new(&self.starts_at, tz),
            LocalDateTime::new(&self.ends_at, tz)
        )?;
        match self.pending_participants() {
            0 => {}
            1 => writeln!(f, "- **Waiting on**: 1 guest")?,
            n => writeln!(f, "- **Waiting on**: {n} guests")?,
        }
        writeln!(f)
    }
}

impl ZonedDisplay for Activity {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, tz: &TimeZone) -> fmt::Result {
        writeln!(
            f,
            "- {}. {} at {}",
            self.id,
            self.title,
            LocalDateTime::new(&self.occurs_at, tz)
        )
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Guest");
        write!(f, "- {}. **{name}** <{}>", self.id, self.email)?;
        if self.is_owner {
            write!(f, " (owner)")?;
        }
        writeln!(f, " {}", confirmation_icon(self.is_confirmed))
    }
}

impl ZonedDisplay for Participant {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, _tz: &TimeZone) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}. **{}**: {}", self.id, self.title, self.url)
    }
}

impl ZonedDisplay for Link {
    fn fmt_zoned(&self, f: &mut fmt::Formatter<'_>, _tz: &TimeZone) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
