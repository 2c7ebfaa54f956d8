//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::tz::TimeZone;

use super::models::InZone;
use crate::models::{Activity, Link, Participant, Trip};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use waypoint_core::{display::CreateResult, models::Link};
///
/// let link = Link {
///     id: 4,
///     trip_id: 1,
///     title: "Airbnb".to_string(),
///     url: "https://airbnb.com/rooms/1".to_string(),
/// };
///
/// let output = CreateResult::new(link, TimeZone::UTC).to_string();
/// assert!(output.contains("Created link with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
    /// Zone the resource's timestamps are shown in
    pub tz: TimeZone,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T, tz: TimeZone) -> Self {
        Self { resource, tz }
    }
}

macro_rules! impl_create_display {
    ($ty:ty, $noun:literal) => {
        impl fmt::Display for CreateResult<$ty> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, concat!("Created ", $noun, " with ID: {}"), self.resource.id)?;
                writeln!(f)?;
                write!(f, "{}", InZone(&self.resource, &self.tz))
            }
        }
    };
}

impl_create_display!(Trip, "trip");
impl_create_display!(Participant, "guest");
impl_create_display!(Activity, "activity");
impl_create_display!(Link, "link");

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
    pub tz: TimeZone,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>, tz: TimeZone) -> Self {
        Self {
            resource,
            changes,
            tz,
        }
    }
}

impl fmt::Display for UpdateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated trip with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", InZone(&self.resource, &self.tz))
    }
}
