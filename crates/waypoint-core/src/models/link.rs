//! Link model definition.

use serde::{Deserialize, Serialize};

/// An important link shared with every guest of a trip (bookings, maps, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Unique identifier for the link
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// Short human-readable label
    pub title: String,

    /// Absolute http(s) URL
    pub url: String,
}
