use std::sync::Arc;

use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan};
use tempfile::TempDir;
use waypoint_core::{
    mail::MemoryMailer, params::CreateTrip, schedule, LinkConfig, TripPlanner,
    TripPlannerBuilder,
};

/// Helper function to create a test planner in UTC with an in-memory mailer
pub async fn create_test_planner() -> (TempDir, TripPlanner, Arc<MemoryMailer>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mailer = Arc::new(MemoryMailer::new());
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_mailer(mailer.clone())
        .with_links(LinkConfig::default())
        .with_time_zone(TimeZone::UTC)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner, mailer)
}

/// First day of every test trip.
pub fn first_day() -> Date {
    schedule::today(&TimeZone::UTC)
        .checked_add(5.days())
        .expect("date")
}

/// `day` at `hour`:00 UTC.
pub fn at(day: Date, hour: i8) -> Timestamp {
    day.at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("zoned")
        .timestamp()
}

/// A four-day trip starting five days from now.
pub fn trip_params(destination: &str, guests: &[&str]) -> CreateTrip {
    let first = first_day();
    CreateTrip {
        destination: destination.to_string(),
        starts_at: at(first, 8),
        ends_at: at(first.checked_add(3.days()).expect("date"), 22),
        emails_to_invite: guests.iter().map(|g| g.to_string()).collect(),
        owner_name: "Ana".to_string(),
        owner_email: "ana@example.com".to_string(),
    }
}
