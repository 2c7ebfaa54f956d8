//! Summary model for trip listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A trip with guest counts, used in list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    pub id: u64,
    pub destination: String,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub is_confirmed: bool,
    pub created_at: Timestamp,
    /// Number of participants, owner included
    pub total_participants: u32,
    /// Number of participants who confirmed
    pub confirmed_participants: u32,
}

impl TripSummary {
    /// Participants that have not confirmed yet.
    pub fn pending_participants(&self) -> u32 {
        self.total_participants
            .saturating_sub(self.confirmed_participants)
    }
}
