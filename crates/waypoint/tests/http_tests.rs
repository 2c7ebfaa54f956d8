use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan};
use serde_json::{json, Value};
use tempfile::TempDir;
use waypoint::http::{router, AppState};
use waypoint_core::{mail::MemoryMailer, schedule, LinkConfig, TripPlannerBuilder};

/// Helper function to create a test server over a fresh database
async fn create_test_server() -> (TempDir, TestServer, Arc<MemoryMailer>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mailer = Arc::new(MemoryMailer::new());
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_mailer(mailer.clone())
        .with_links(LinkConfig::new("http://api.test", "http://web.test"))
        .with_time_zone(TimeZone::UTC)
        .build()
        .await
        .expect("Failed to create planner");

    let server = TestServer::new(router(AppState::new(planner))).expect("Failed to start server");
    (temp_dir, server, mailer)
}

fn day(days: i64) -> Date {
    schedule::today(&TimeZone::UTC)
        .checked_add(days.days())
        .expect("date")
}

fn at(day: Date, hour: i8) -> Timestamp {
    day.at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("zoned")
        .timestamp()
}

fn trip_body() -> Value {
    json!({
        "destination": "Florianópolis",
        "starts_at": at(day(3), 9).to_string(),
        "ends_at": at(day(5), 18).to_string(),
        "emails_to_invite": ["bia@example.com"],
        "owner_name": "Ana",
        "owner_email": "ana@example.com",
    })
}

async fn create_trip(server: &TestServer) -> u64 {
    let response = server.post("/trips").json(&trip_body()).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["tripId"]
        .as_u64()
        .expect("tripId")
}

#[tokio::test]
async fn test_create_and_get_trip() {
    let (_temp_dir, server, mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server.get(&format!("/trips/{trip_id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["trip"]["id"], trip_id);
    assert_eq!(body["trip"]["destination"], "Florianópolis");
    assert_eq!(body["trip"]["is_confirmed"], false);
    assert_eq!(
        body["trip"]["starts_at"],
        at(day(3), 9).to_string().as_str()
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0]
        .html
        .contains(&format!("http://api.test/trips/{trip_id}/confirm")));
}

#[tokio::test]
async fn test_create_trip_validation_errors() {
    let (_temp_dir, server, _mailer) = create_test_server().await;

    let mut body = trip_body();
    body["starts_at"] = json!(at(day(-1), 9).to_string());
    let response = server.post("/trips").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Invalid trip start date." }));

    let mut body = trip_body();
    body["ends_at"] = json!(at(day(2), 9).to_string());
    let response = server.post("/trips").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Invalid trip end date." }));

    let response = server
        .post("/trips")
        .json(&json!({ "destination": "Florianópolis" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_unknown_trip_is_client_error() {
    let (_temp_dir, server, _mailer) = create_test_server().await;

    let response = server.get("/trips/42").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Trip not found" }));

    let response = server.get("/trips/42/links").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/participants/42").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Participant not found" }));

    let response = server.get("/trips/not-a-number").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_trip() {
    let (_temp_dir, server, _mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server
        .put(&format!("/trips/{trip_id}"))
        .json(&json!({
            "destination": "Garopaba",
            "starts_at": at(day(4), 9).to_string(),
            "ends_at": at(day(6), 18).to_string(),
        }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "tripId": trip_id }));

    let body = server.get(&format!("/trips/{trip_id}")).await.json::<Value>();
    assert_eq!(body["trip"]["destination"], "Garopaba");

    let response = server
        .put(&format!("/trips/{trip_id}"))
        .json(&json!({
            "destination": "Rio",
            "starts_at": at(day(4), 9).to_string(),
            "ends_at": at(day(6), 18).to_string(),
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_confirm_trip_redirects_and_invites() {
    let (_temp_dir, server, mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server.get(&format!("/trips/{trip_id}/confirm")).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        format!("http://web.test/trips/{trip_id}").as_str()
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].to_address, "bia@example.com");

    let body = server.get(&format!("/trips/{trip_id}")).await.json::<Value>();
    assert_eq!(body["trip"]["is_confirmed"], true);
}

#[tokio::test]
async fn test_invites_and_participants() {
    let (_temp_dir, server, _mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server
        .post(&format!("/trips/{trip_id}/invites"))
        .json(&json!({ "email": "caio@example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let participant_id = response.json::<Value>()["participantId"]
        .as_u64()
        .expect("participantId");

    let response = server
        .post(&format!("/trips/{trip_id}/invites"))
        .json(&json!({ "email": "caio" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = server
        .get(&format!("/trips/{trip_id}/participants"))
        .await
        .json::<Value>();
    let participants = body["participants"].as_array().expect("participants");
    assert_eq!(participants.len(), 3);
    assert_eq!(participants[0]["name"], "Ana");
    assert_eq!(participants[0]["is_confirmed"], true);
    assert!(participants[2]["name"].is_null());

    let response = server
        .get(&format!("/participants/{participant_id}/confirm"))
        .await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        format!("http://web.test/trips/{trip_id}").as_str()
    );

    let body = server
        .get(&format!("/participants/{participant_id}"))
        .await
        .json::<Value>();
    assert_eq!(body["participant"]["email"], "caio@example.com");
    assert_eq!(body["participant"]["is_confirmed"], true);
}

#[tokio::test]
async fn test_activities_by_day() {
    let (_temp_dir, server, _mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    for (title, occurs_at) in [
        ("Jantar", at(day(3), 20)),
        ("Trilha", at(day(3), 10)),
    ] {
        let response = server
            .post(&format!("/trips/{trip_id}/activities"))
            .json(&json!({ "title": title, "occurs_at": occurs_at.to_string() }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert!(response.json::<Value>()["activityId"].is_u64());
    }

    let response = server
        .post(&format!("/trips/{trip_id}/activities"))
        .json(&json!({ "title": "Too late", "occurs_at": at(day(9), 10).to_string() }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Invalid activity date." }));

    let body = server
        .get(&format!("/trips/{trip_id}/activities"))
        .await
        .json::<Value>();
    let days = body["activities"].as_array().expect("activities");
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["date"], day(3).to_string().as_str());
    assert_eq!(days[0]["activities"][0]["title"], "Trilha");
    assert_eq!(days[0]["activities"][1]["title"], "Jantar");
    assert!(days[1]["activities"].as_array().expect("day").is_empty());
}

#[tokio::test]
async fn test_links() {
    let (_temp_dir, server, _mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server
        .post(&format!("/trips/{trip_id}/links"))
        .json(&json!({
            "title": "Reserva do AirBnB",
            "url": "https://www.airbnb.com.br/rooms/104700011",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let link_id = response.json::<Value>()["linkId"].as_u64().expect("linkId");

    let response = server
        .post(&format!("/trips/{trip_id}/links"))
        .json(&json!({ "title": "Bad", "url": "nope" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    server
        .get(&format!("/trips/{trip_id}/links"))
        .await
        .assert_json(&json!({
            "links": [{
                "id": link_id,
                "title": "Reserva do AirBnB",
                "url": "https://www.airbnb.com.br/rooms/104700011",
            }]
        }));
}

#[tokio::test]
async fn test_accepts_date_only_and_rfc2822_timestamps() {
    let (_temp_dir, server, _mailer) = create_test_server().await;

    let mut body = trip_body();
    body["starts_at"] = json!(day(3).to_string());
    body["ends_at"] = json!(day(5).to_string());
    let response = server.post("/trips").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    let trip_id = response.json::<Value>()["tripId"]
        .as_u64()
        .expect("tripId");

    let trip = server.get(&format!("/trips/{trip_id}")).await.json::<Value>();
    assert_eq!(trip["trip"]["starts_at"], at(day(3), 0).to_string().as_str());
    assert_eq!(trip["trip"]["ends_at"], at(day(5), 0).to_string().as_str());

    let occurs_at = at(day(4), 10);
    let response = server
        .post(&format!("/trips/{trip_id}/activities"))
        .json(&json!({
            "title": "Trilha",
            "occurs_at": occurs_at.strftime("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .put(&format!("/trips/{trip_id}"))
        .json(&json!({
            "destination": "Garopaba",
            "starts_at": day(3).to_string(),
            "ends_at": at(day(6), 12).to_string(),
        }))
        .await;
    response.assert_status_ok();

    let days = server
        .get(&format!("/trips/{trip_id}/activities"))
        .await
        .json::<Value>();
    assert_eq!(
        days["activities"][1]["activities"][0]["occurs_at"],
        occurs_at.to_string().as_str()
    );

    let response = server
        .post(&format!("/trips/{trip_id}/activities"))
        .json(&json!({ "title": "Trilha", "occurs_at": "tomorrow morning" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"]
        .as_str()
        .expect("message")
        .contains("Invalid date: tomorrow morning"));
}

#[tokio::test]
async fn test_cors_is_permissive() {
    let (_temp_dir, server, _mailer) = create_test_server().await;
    let trip_id = create_trip(&server).await;

    let response = server
        .get(&format!("/trips/{trip_id}"))
        .add_header(header::ORIGIN, HeaderValue::from_static("http://web.test"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let response = server
        .method(Method::OPTIONS, "/trips")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://elsewhere.test"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
