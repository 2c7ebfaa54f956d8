//! Activity model definitions.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// Something scheduled to happen during a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// What happens
    pub title: String,

    /// When it happens (UTC)
    pub occurs_at: Timestamp,
}

/// Activities of a single calendar day of a trip, ordered by time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayActivities {
    /// The calendar day, in the planner's time zone
    pub date: Date,

    /// Activities happening on that day
    pub activities: Vec<Activity>,
}
