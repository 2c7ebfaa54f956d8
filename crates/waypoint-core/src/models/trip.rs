//! Trip model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A trip to a destination between two instants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Where the trip goes
    pub destination: String,

    /// Start of the trip (UTC)
    pub starts_at: Timestamp,

    /// End of the trip (UTC)
    pub ends_at: Timestamp,

    /// Whether the owner confirmed the trip through the emailed link
    #[serde(default)]
    pub is_confirmed: bool,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,
}
