//! Parameter structures for Waypoint operations
//!
//! These structures are shared by every interface (CLI, REST API) and carry
//! no framework-specific derives beyond serde. Each interface converts its own
//! argument or request-body types into these before calling the planner.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP Bodies    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (validated)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Timestamps in request bodies go through [`deserialize_timestamp`], which
//! accepts more than RFC 3339 so existing clients keep working.
//!
//! Validation lives next to the data: every create/update parameter exposes a
//! `validate` method that reports the first offending field as
//! [`TripError::InvalidInput`](crate::TripError::InvalidInput).

use jiff::{civil::Date, fmt::rfc2822, tz::TimeZone, Timestamp};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{
    error::{Result, TripError},
    models::Trip,
    schedule, validate,
    validate::MIN_TITLE_CHARS,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for get_trip, confirm_trip, get_participants, get_participant,
/// confirm_participant, get_activities and get_links.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new trip together with its owner and guests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTrip {
    /// Where the trip goes (at least 4 characters)
    pub destination: String,
    /// Start of the trip
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub starts_at: Timestamp,
    /// End of the trip
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub ends_at: Timestamp,
    /// Guests to invite by email
    #[serde(default)]
    pub emails_to_invite: Vec<String>,
    /// Name of the person creating the trip
    pub owner_name: String,
    /// Email of the person creating the trip; receives the confirmation link
    pub owner_email: String,
}

impl CreateTrip {
    /// Validates every field, reporting the first failure.
    pub fn validate(&self, today: Date, tz: &TimeZone) -> Result<()> {
        validate::min_chars("destination", &self.destination, MIN_TITLE_CHARS)?;
        validate::email("owner_email", &self.owner_email)?;
        for email in &self.emails_to_invite {
            validate::email("emails_to_invite", email)?;
        }
        schedule::ensure_trip_window(self.starts_at, self.ends_at, today, tz)
    }
}

/// Parameters for changing a trip's destination and dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateTrip {
    /// ID of the trip to update
    pub trip_id: u64,
    /// New destination (at least 4 characters)
    pub destination: String,
    /// New start of the trip
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub starts_at: Timestamp,
    /// New end of the trip
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub ends_at: Timestamp,
}

impl UpdateTrip {
    /// Validates the destination and the trip window.
    pub fn validate(&self, today: Date, tz: &TimeZone) -> Result<()> {
        validate::min_chars("destination", &self.destination, MIN_TITLE_CHARS)?;
        schedule::ensure_trip_window(self.starts_at, self.ends_at, today, tz)
    }
}

/// Parameters for inviting one more guest to a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateInvite {
    /// ID of the trip to invite the guest to
    pub trip_id: u64,
    /// Guest email address
    pub email: String,
}

impl CreateInvite {
    pub fn validate(&self) -> Result<()> {
        validate::email("email", &self.email)
    }
}

/// Parameters for scheduling an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateActivity {
    /// ID of the trip the activity belongs to
    pub trip_id: u64,
    /// What happens (at least 4 characters)
    pub title: String,
    /// When it happens; must fall within the trip
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub occurs_at: Timestamp,
}

impl CreateActivity {
    /// Validates the title and that the activity falls within `trip`.
    pub fn validate(&self, trip: &Trip) -> Result<()> {
        validate::min_chars("title", &self.title, MIN_TITLE_CHARS)?;
        schedule::ensure_activity_window(self.occurs_at, trip)
    }
}

/// Parameters for sharing a link with a trip's guests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateLink {
    /// ID of the trip the link belongs to
    pub trip_id: u64,
    /// Short label (at least 4 characters)
    pub title: String,
    /// Absolute http(s) URL
    pub url: String,
}

impl CreateLink {
    pub fn validate(&self) -> Result<()> {
        validate::min_chars("title", &self.title, MIN_TITLE_CHARS)?;
        validate::url("url", &self.url)
    }
}

/// Parses a timestamp sent by a client.
///
/// Tried in order:
///
/// - RFC 3339: `2030-03-10T09:00:00-03:00`
/// - RFC 2822, as JavaScript date libraries print it:
///   `Sun, 10 Mar 2030 12:00:00 GMT`
/// - a bare date, read as midnight UTC: `2030-03-10`
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    let text = text.trim();

    if let Ok(instant) = text.parse::<Timestamp>() {
        return Ok(instant);
    }

    if let Ok(instant) = rfc2822::DateTimeParser::new().parse_timestamp(text) {
        return Ok(instant);
    }

    if let Ok(day) = text.parse::<Date>() {
        return day
            .to_zoned(TimeZone::UTC)
            .map(|zoned| zoned.timestamp())
            .map_err(|e| TripError::invalid_input("timestamp").with_reason(e.to_string()));
    }

    Err(TripError::invalid_input("timestamp").with_reason(format!("Invalid date: {text}")))
}

/// Serde adapter for [`parse_timestamp`], for use with
/// `#[serde(deserialize_with = "...")]`.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_timestamp(&text).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::TripError;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    fn create_trip() -> CreateTrip {
        CreateTrip {
            destination: "Florianópolis".to_string(),
            starts_at: ts("2030-05-01T12:00:00Z"),
            ends_at: ts("2030-05-05T12:00:00Z"),
            emails_to_invite: vec!["guest@example.com".to_string()],
            owner_name: "Ana".to_string(),
            owner_email: "ana@example.com".to_string(),
        }
    }

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(TripError::InvalidInput { field, .. }) => field,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_create_trip_valid() {
        assert!(create_trip()
            .validate(date(2030, 4, 1), &TimeZone::UTC)
            .is_ok());
    }

    #[test]
    fn test_create_trip_short_destination() {
        let params = CreateTrip {
            destination: "Rio".to_string(),
            ..create_trip()
        };
        assert_eq!(field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)), "destination");
    }

    #[test]
    fn test_create_trip_invalid_guest_email() {
        let params = CreateTrip {
            emails_to_invite: vec!["ok@example.com".to_string(), "broken".to_string()],
            ..create_trip()
        };
        assert_eq!(
            field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)),
            "emails_to_invite"
        );
    }

    #[test]
    fn test_create_trip_invalid_owner_email() {
        let params = CreateTrip {
            owner_email: "ana.example.com".to_string(),
            ..create_trip()
        };
        assert_eq!(field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)), "owner_email");
    }

    #[test]
    fn test_create_trip_in_the_past() {
        assert_eq!(
            field_of(create_trip().validate(date(2030, 6, 1), &TimeZone::UTC)),
            "starts_at"
        );
    }

    #[test]
    fn test_create_trip_deserializes_without_guests() {
        let json = r#"{
            "destination": "Salvador",
            "starts_at": "2030-05-01T12:00:00Z",
            "ends_at": "2030-05-03T12:00:00Z",
            "owner_name": "Ana",
            "owner_email": "ana@example.com"
        }"#;
        let params: CreateTrip = serde_json::from_str(json).expect("valid body");
        assert!(params.emails_to_invite.is_empty());
    }

    #[test]
    fn test_update_trip_validation() {
        let params = UpdateTrip {
            trip_id: 1,
            destination: "Recife".to_string(),
            starts_at: ts("2030-05-05T12:00:00Z"),
            ends_at: ts("2030-05-01T12:00:00Z"),
        };
        assert_eq!(field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)), "ends_at");
    }

    #[test]
    fn test_create_activity_outside_trip() {
        let trip = Trip {
            id: 1,
            destination: "Recife".to_string(),
            starts_at: ts("2030-05-01T12:00:00Z"),
            ends_at: ts("2030-05-03T12:00:00Z"),
            is_confirmed: true,
            created_at: ts("2030-04-01T12:00:00Z"),
        };
        let params = CreateActivity {
            trip_id: 1,
            title: "Beach day".to_string(),
            occurs_at: ts("2030-05-04T10:00:00Z"),
        };
        assert_eq!(field_of(params.validate(&trip)), "occurs_at");

        let params = CreateActivity {
            title: "Go".to_string(),
            occurs_at: ts("2030-05-02T10:00:00Z"),
            ..params
        };
        assert_eq!(field_of(params.validate(&trip)), "title");
    }

    #[test]
    fn test_create_link_and_invite_validation() {
        let link = CreateLink {
            trip_id: 1,
            title: "Airbnb booking".to_string(),
            url: "https://airbnb.com/rooms/1".to_string(),
        };
        assert!(link.validate().is_ok());

        let link = CreateLink {
            url: "airbnb".to_string(),
            ..link
        };
        assert_eq!(field_of(link.validate()), "url");

        let invite = CreateInvite {
            trip_id: 1,
            email: "nope".to_string(),
        };
        assert_eq!(field_of(invite.validate()), "email");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2030-03-10T09:00:00-03:00").expect("rfc3339"),
            ts("2030-03-10T12:00:00Z")
        );
        assert_eq!(
            parse_timestamp("Sun, 10 Mar 2030 12:00:00 GMT").expect("rfc2822"),
            ts("2030-03-10T12:00:00Z")
        );
        assert_eq!(
            parse_timestamp("Sun, 10 Mar 2030 09:00:00 -0300").expect("rfc2822 offset"),
            ts("2030-03-10T12:00:00Z")
        );
        assert_eq!(
            parse_timestamp("2030-03-10").expect("date"),
            ts("2030-03-10T00:00:00Z")
        );
        assert_eq!(field_of(parse_timestamp("next tuesday").map(|_| ())), "timestamp");
    }

    #[test]
    fn test_create_activity_deserializes_client_date_text() {
        let json = r#"{
            "trip_id": 1,
            "title": "Beach day",
            "occurs_at": "Thu, 02 May 2030 10:00:00 GMT"
        }"#;
        let params: CreateActivity = serde_json::from_str(json).expect("valid body");
        assert_eq!(params.occurs_at, ts("2030-05-02T10:00:00Z"));

        let json = r#"{"trip_id": 1, "title": "Beach day", "occurs_at": "soon"}"#;
        let err = serde_json::from_str::<CreateActivity>(json).expect_err("rejected");
        assert!(err.to_string().contains("Invalid date: soon"));
    }

    #[test]
    fn test_titles_are_trimmed_before_length_check() {
        let link = CreateLink {
            trip_id: 1,
            title: "   a".to_string(),
            url: "https://airbnb.com/rooms/1".to_string(),
        };
        assert_eq!(field_of(link.validate()), "title");

        let params = CreateTrip {
            destination: "  Rio  ".to_string(),
            ..create_trip()
        };
        assert_eq!(field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)), "destination");

        let params = UpdateTrip {
            trip_id: 1,
            destination: "Rio ".to_string(),
            starts_at: ts("2030-05-01T12:00:00Z"),
            ends_at: ts("2030-05-03T12:00:00Z"),
        };
        assert_eq!(field_of(params.validate(date(2030, 4, 1), &TimeZone::UTC)), "destination");
    }
}
