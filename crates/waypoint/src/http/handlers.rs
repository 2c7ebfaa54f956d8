//! Request handlers, one per route.
//!
//! Path parameters and JSON bodies are taken as `Result`s so malformed
//! requests get the same `{"message"}` body as validation failures.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use waypoint_core::{
    params::{
        deserialize_timestamp, CreateActivity, CreateInvite, CreateLink, CreateTrip, Id,
        UpdateTrip,
    },
    Activity, DayActivities, Link, Participant, Trip, TripError,
};

use super::{errors::ApiResult, AppState};

type IdPath = Result<Path<u64>, PathRejection>;
type Body<T> = Result<Json<T>, JsonRejection>;

/// Public view of a trip.
#[derive(Debug, Serialize)]
pub struct TripView {
    pub id: u64,
    pub destination: String,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub is_confirmed: bool,
}

impl From<Trip> for TripView {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            destination: trip.destination,
            starts_at: trip.starts_at,
            ends_at: trip.ends_at,
            is_confirmed: trip.is_confirmed,
        }
    }
}

/// Public view of a participant.
#[derive(Debug, Serialize)]
pub struct ParticipantView {
    pub id: u64,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
}

impl From<Participant> for ParticipantView {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name,
            email: participant.email,
            is_confirmed: participant.is_confirmed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: u64,
    pub title: String,
    pub occurs_at: Timestamp,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            occurs_at: activity.occurs_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: Date,
    pub activities: Vec<ActivityView>,
}

impl From<DayActivities> for DayView {
    fn from(day: DayActivities) -> Self {
        Self {
            date: day.date,
            activities: day.activities.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkView {
    pub id: u64,
    pub title: String,
    pub url: String,
}

impl From<Link> for LinkView {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTripBody {
    pub destination: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub starts_at: Timestamp,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub ends_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct InviteBody {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivityBody {
    pub title: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub occurs_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct LinkBody {
    pub title: String,
    pub url: String,
}

fn found(location: String) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

pub async fn create_trip(
    State(state): State<AppState>,
    body: Body<CreateTrip>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(params) = body?;
    let trip = state.planner.create_trip(&params).await?;
    Ok((StatusCode::CREATED, Json(json!({ "tripId": trip.id }))))
}

pub async fn get_trip(State(state): State<AppState>, path: IdPath) -> ApiResult<Json<Value>> {
    let Path(trip_id) = path?;
    let trip = state
        .planner
        .get_trip(&Id { id: trip_id })
        .await?
        .ok_or(TripError::TripNotFound { id: trip_id })?;
    Ok(Json(json!({ "trip": TripView::from(trip) })))
}

pub async fn update_trip(
    State(state): State<AppState>,
    path: IdPath,
    body: Body<UpdateTripBody>,
) -> ApiResult<Json<Value>> {
    let Path(trip_id) = path?;
    let Json(body) = body?;
    let trip = state
        .planner
        .update_trip(&UpdateTrip {
            trip_id,
            destination: body.destination,
            starts_at: body.starts_at,
            ends_at: body.ends_at,
        })
        .await?;
    Ok(Json(json!({ "tripId": trip.id })))
}

pub async fn confirm_trip(
    State(state): State<AppState>,
    path: IdPath,
) -> ApiResult<impl IntoResponse> {
    let Path(trip_id) = path?;
    let confirmation = state.planner.confirm_trip(&Id { id: trip_id }).await?;
    Ok(found(confirmation.redirect_to))
}

pub async fn create_invite(
    State(state): State<AppState>,
    path: IdPath,
    body: Body<InviteBody>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Path(trip_id) = path?;
    let Json(body) = body?;
    let participant = state
        .planner
        .create_invite(&CreateInvite {
            trip_id,
            email: body.email,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "participantId": participant.id })),
    ))
}

pub async fn get_participants(
    State(state): State<AppState>,
    path: IdPath,
) -> ApiResult<Json<Value>> {
    let Path(trip_id) = path?;
    let participants: Vec<ParticipantView> = state
        .planner
        .get_participants(&Id { id: trip_id })
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "participants": participants })))
}

pub async fn get_participant(
    State(state): State<AppState>,
    path: IdPath,
) -> ApiResult<Json<Value>> {
    let Path(participant_id) = path?;
    let participant = state
        .planner
        .get_participant(&Id { id: participant_id })
        .await?
        .ok_or(TripError::ParticipantNotFound { id: participant_id })?;
    Ok(Json(
        json!({ "participant": ParticipantView::from(participant) }),
    ))
}

pub async fn confirm_participant(
    State(state): State<AppState>,
    path: IdPath,
) -> ApiResult<impl IntoResponse> {
    let Path(participant_id) = path?;
    let location = state
        .planner
        .confirm_participant(&Id { id: participant_id })
        .await?;
    Ok(found(location))
}

pub async fn create_activity(
    State(state): State<AppState>,
    path: IdPath,
    body: Body<ActivityBody>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Path(trip_id) = path?;
    let Json(body) = body?;
    let activity = state
        .planner
        .create_activity(&CreateActivity {
            trip_id,
            title: body.title,
            occurs_at: body.occurs_at,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "activityId": activity.id })),
    ))
}

pub async fn get_activities(
    State(state): State<AppState>,
    path: IdPath,
) -> ApiResult<Json<Value>> {
    let Path(trip_id) = path?;
    let days: Vec<DayView> = state
        .planner
        .get_activities(&Id { id: trip_id })
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "activities": days })))
}

pub async fn create_link(
    State(state): State<AppState>,
    path: IdPath,
    body: Body<LinkBody>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Path(trip_id) = path?;
    let Json(body) = body?;
    let link = state
        .planner
        .create_link(&CreateLink {
            trip_id,
            title: body.title,
            url: body.url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "linkId": link.id }))))
}

pub async fn get_links(State(state): State<AppState>, path: IdPath) -> ApiResult<Json<Value>> {
    let Path(trip_id) = path?;
    let links: Vec<LinkView> = state
        .planner
        .get_links(&Id { id: trip_id })
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({ "links": links })))
}
