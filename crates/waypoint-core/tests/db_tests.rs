mod common;

use jiff::ToSpan;
use tempfile::NamedTempFile;
use waypoint_core::{params::UpdateTrip, Database, TripError};

use common::trip_params;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().expect("Failed to read version"), 1);
}

#[test]
fn test_reopening_database_keeps_data() {
    let (temp_file, mut db) = create_test_db();
    let (trip, _owner) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert!(db.get_trip(trip.id).expect("Failed to get trip").is_some());
}

#[test]
fn test_create_trip_with_owner_and_guests() {
    let (_temp_file, mut db) = create_test_db();

    let (trip, owner) = db
        .create_trip(&trip_params(
            "Florianópolis",
            &["bia@example.com", "caio@example.com"],
        ))
        .expect("Failed to create trip");

    assert!(trip.id > 0);
    assert!(!trip.is_confirmed);
    assert_eq!(owner.trip_id, trip.id);
    assert_eq!(owner.name.as_deref(), Some("Ana"));
    assert!(owner.is_owner && owner.is_confirmed);

    let participants = db
        .get_participants(trip.id)
        .expect("Failed to get participants");
    assert_eq!(participants.len(), 3);
    assert_eq!(participants[0], owner);

    let guests = db.get_guests(trip.id).expect("Failed to get guests");
    let emails: Vec<&str> = guests.iter().map(|g| g.email.as_str()).collect();
    assert_eq!(emails, vec!["bia@example.com", "caio@example.com"]);
}

#[test]
fn test_get_trip_round_trips_fields() {
    let (_temp_file, mut db) = create_test_db();
    let params = trip_params("Florianópolis", &[]);
    let (created, _owner) = db.create_trip(&params).expect("Failed to create trip");

    let trip = db
        .get_trip(created.id)
        .expect("Failed to get trip")
        .expect("Trip should exist");

    assert_eq!(trip, created);
    assert_eq!(trip.starts_at, params.starts_at);
    assert!(db.get_trip(999).expect("Failed to query").is_none());
}

#[test]
fn test_list_trips_newest_first_with_counts() {
    let (_temp_file, mut db) = create_test_db();
    let (first, _) = db
        .create_trip(&trip_params("Lisboa", &["bia@example.com"]))
        .expect("Failed to create trip");
    let (second, _) = db
        .create_trip(&trip_params("Porto", &[]))
        .expect("Failed to create trip");

    let trips = db.list_trips().expect("Failed to list trips");

    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].id, second.id);
    assert_eq!(trips[1].id, first.id);
    assert_eq!(trips[1].total_participants, 2);
    assert_eq!(trips[1].confirmed_participants, 1);
    assert_eq!(trips[1].pending_participants(), 1);
}

#[test]
fn test_update_trip() {
    let (_temp_file, mut db) = create_test_db();
    let (trip, _) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");

    let updated = db
        .update_trip(&UpdateTrip {
            trip_id: trip.id,
            destination: "Sintra".to_string(),
            starts_at: trip.starts_at + 1.hour(),
            ends_at: trip.ends_at,
        })
        .expect("Failed to update trip");

    assert_eq!(updated.destination, "Sintra");
    assert_eq!(updated.starts_at, trip.starts_at + 1.hour());
    assert_eq!(updated.created_at, trip.created_at);

    let missing = db.update_trip(&UpdateTrip {
        trip_id: 999,
        destination: "Sintra".to_string(),
        starts_at: trip.starts_at,
        ends_at: trip.ends_at,
    });
    assert!(matches!(missing, Err(TripError::TripNotFound { id: 999 })));
}

#[test]
fn test_confirm_trip_reports_state_change() {
    let (_temp_file, mut db) = create_test_db();
    let (trip, _) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");

    assert!(db.confirm_trip(trip.id).expect("Failed to confirm"));
    assert!(!db.confirm_trip(trip.id).expect("Failed to confirm again"));
    assert!(matches!(
        db.confirm_trip(999),
        Err(TripError::TripNotFound { id: 999 })
    ));
}

#[test]
fn test_guests_and_confirmation() {
    let (_temp_file, mut db) = create_test_db();
    let (trip, _) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");

    let guest = db
        .add_guest(trip.id, "davi@example.com")
        .expect("Failed to add guest");
    assert!(guest.name.is_none());
    assert!(!guest.is_confirmed);

    let before = db
        .confirm_participant(guest.id)
        .expect("Failed to confirm participant");
    assert!(!before.is_confirmed);

    let again = db
        .confirm_participant(guest.id)
        .expect("Failed to confirm participant again");
    assert!(again.is_confirmed);

    assert!(matches!(
        db.add_guest(999, "x@example.com"),
        Err(TripError::TripNotFound { id: 999 })
    ));
    assert!(matches!(
        db.confirm_participant(999),
        Err(TripError::ParticipantNotFound { id: 999 })
    ));
    assert!(matches!(
        db.get_participants(999),
        Err(TripError::TripNotFound { id: 999 })
    ));
}

#[test]
fn test_activities_ordered_by_time() {
    let (_temp_file, mut db) = create_test_db();
    let (trip, _) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");

    let later = db
        .add_activity(trip.id, "Fado night", trip.starts_at + 12.hours())
        .expect("Failed to add activity");
    let earlier = db
        .add_activity(trip.id, "Tram 28", trip.starts_at + 2.hours())
        .expect("Failed to add activity");

    let activities = db.get_activities(trip.id).expect("Failed to get activities");
    let ids: Vec<u64> = activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    assert!(matches!(
        db.add_activity(999, "Nowhere", trip.starts_at),
        Err(TripError::TripNotFound { id: 999 })
    ));
}

#[test]
fn test_links_in_insertion_order() {
    let (_temp_file, mut db) = create_test_db();
    let (trip, _) = db
        .create_trip(&trip_params("Lisboa", &[]))
        .expect("Failed to create trip");

    db.add_link(trip.id, "Hotel booking", "https://hotel.example.com/b/1")
        .expect("Failed to add link");
    db.add_link(trip.id, "Flight", "https://air.example.com/x")
        .expect("Failed to add link");

    let links = db.get_links(trip.id).expect("Failed to get links");
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].title, "Hotel booking");
    assert_eq!(links[1].url, "https://air.example.com/x");

    assert!(db.get_links(999).is_err());
}
