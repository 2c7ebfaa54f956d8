//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a friendly sentence so callers
//! never print a bare heading.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use super::models::InZone;
use crate::models::{DayActivities, Link, Participant, TripSummary};

/// Newtype wrapper for displaying trip listings.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::TripSummaries, models::TripSummary};
/// use jiff::{tz::TimeZone, Timestamp};
///
/// let trip = TripSummary {
///     id: 1,
///     destination: "Lisboa".to_string(),
///     starts_at: Timestamp::now(),
///     ends_at: Timestamp::now(),
///     is_confirmed: false,
///     created_at: Timestamp::now(),
///     total_participants: 3,
///     confirmed_participants: 1,
/// };
///
/// let output = format!("{}", TripSummaries::new(vec![trip], TimeZone::UTC));
/// assert!(output.contains("Lisboa"));
/// assert!(output.contains("(1/3 confirmed)"));
/// ```
pub struct TripSummaries {
    pub trips: Vec<TripSummary>,
    pub tz: TimeZone,
}

impl TripSummaries {
    pub fn new(trips: Vec<TripSummary>, tz: TimeZone) -> Self {
        Self { trips, tz }
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripSummary> {
        self.trips.iter()
    }
}

impl fmt::Display for TripSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trips.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for trip in &self.trips {
            write!(f, "{}", InZone(trip, &self.tz))?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a trip's guest list.
pub struct Participants(pub Vec<Participant>);

impl fmt::Display for Participants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Guests")?;
        writeln!(f)?;
        if self.0.is_empty() {
            return writeln!(f, "No guests invited.");
        }
        for participant in &self.0 {
            write!(f, "{participant}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a trip's important links.
pub struct Links(pub Vec<Link>);

impl fmt::Display for Links {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Important Links")?;
        writeln!(f)?;
        if self.0.is_empty() {
            return writeln!(f, "No links added.");
        }
        for link in &self.0 {
            write!(f, "{link}")?;
        }
        Ok(())
    }
}

/// Activities of a trip, one section per day.
///
/// Each section is titled "Day N Weekday"; activities show their local time
/// as `HH:MMh` and activities already in the past are marked done.
pub struct Agenda<'a> {
    pub days: &'a [DayActivities],
    pub tz: &'a TimeZone,
    pub now: Timestamp,
}

impl<'a> Agenda<'a> {
    /// An agenda relative to the current instant.
    pub fn new(days: &'a [DayActivities], tz: &'a TimeZone) -> Self {
        Self {
            days,
            tz,
            now: Timestamp::now(),
        }
    }
}

impl fmt::Display for Agenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Activities")?;

        if self.days.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No activities scheduled.");
        }

        for day in self.days {
            writeln!(f)?;
            writeln!(f, "### Day {} {}", day.date.day(), day.date.strftime("%A"))?;
            writeln!(f)?;

            if day.activities.is_empty() {
                writeln!(f, "No activity registered on this date.")?;
                continue;
            }

            for activity in &day.activities {
                let marker = if activity.occurs_at < self.now { "✓" } else { "○" };
                writeln!(
                    f,
                    "- {marker} {} {} (ID: {})",
                    activity
                        .occurs_at
                        .to_zoned(self.tz.clone())
                        .strftime("%H:%Mh"),
                    activity.title,
                    activity.id
                )?;
            }
        }

        Ok(())
    }
}
