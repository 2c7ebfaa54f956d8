//! Participant model definition.

use serde::{Deserialize, Serialize};

/// A person attached to a trip: its owner or an invited guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Unique identifier for the participant
    pub id: u64,

    /// ID of the trip the participant belongs to
    pub trip_id: u64,

    /// Display name; guests invited by email have none until they fill it in
    pub name: Option<String>,

    /// Email address invitations are sent to
    pub email: String,

    /// Whether the participant confirmed attendance
    pub is_confirmed: bool,

    /// Whether the participant created the trip
    pub is_owner: bool,
}
