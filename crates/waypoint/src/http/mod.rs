//! REST API over the trip planner.
//!
//! | Method & path                           | Success                      |
//! |-----------------------------------------|------------------------------|
//! | `POST /trips`                           | 201 `{"tripId"}`             |
//! | `GET /trips/{trip_id}`                  | 200 `{"trip"}`               |
//! | `PUT /trips/{trip_id}`                  | 200 `{"tripId"}`             |
//! | `GET /trips/{trip_id}/confirm`          | 302 to the trip page         |
//! | `POST /trips/{trip_id}/invites`         | 201 `{"participantId"}`      |
//! | `GET /trips/{trip_id}/participants`     | 200 `{"participants"}`       |
//! | `GET /participants/{participant_id}`    | 200 `{"participant"}`        |
//! | `GET /participants/{participant_id}/confirm` | 302 to the trip page    |
//! | `POST /trips/{trip_id}/activities`      | 201 `{"activityId"}`         |
//! | `GET /trips/{trip_id}/activities`       | 200 `{"activities"}`         |
//! | `POST /trips/{trip_id}/links`           | 201 `{"linkId"}`             |
//! | `GET /trips/{trip_id}/links`            | 200 `{"links"}`              |
//!
//! Failures answer `{"message"}`: 400 for anything the client can fix,
//! including unknown IDs, and 500 otherwise.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use waypoint_core::TripPlanner;

pub mod errors;
pub mod handlers;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
}

impl AppState {
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Builds the API router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/trips", post(handlers::create_trip))
        .route(
            "/trips/{trip_id}",
            get(handlers::get_trip).put(handlers::update_trip),
        )
        .route("/trips/{trip_id}/confirm", get(handlers::confirm_trip))
        .route("/trips/{trip_id}/invites", post(handlers::create_invite))
        .route(
            "/trips/{trip_id}/participants",
            get(handlers::get_participants),
        )
        .route(
            "/trips/{trip_id}/activities",
            post(handlers::create_activity).get(handlers::get_activities),
        )
        .route(
            "/trips/{trip_id}/links",
            post(handlers::create_link).get(handlers::get_links),
        )
        .route(
            "/participants/{participant_id}",
            get(handlers::get_participant),
        )
        .route(
            "/participants/{participant_id}/confirm",
            get(handlers::confirm_participant),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `addr` until SIGINT or SIGTERM.
pub async fn serve(planner: TripPlanner, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server running on http://{}", listener.local_addr()?);

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let shutdown = async move {
        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    };

    axum::serve(listener, router(AppState::new(planner)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("HTTP server shutdown complete");
    Ok(())
}
