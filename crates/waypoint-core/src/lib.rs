//! Core library for the Waypoint trip planner.
//!
//! This crate holds the business logic for trips, guests, activities and
//! links: data models, validation, calendar and form helpers, SQLite
//! persistence, email composition, and the async [`TripPlanner`] API used by
//! both the CLI and the HTTP server.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): collections, agenda, headline and
//!   operation results
//! - **Terminal Rendering**: the CLI renders the markdown with termimad
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{Timestamp, ToSpan};
//! use waypoint_core::{display::InZone, params::{CreateTrip, Id}, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let starts_at = Timestamp::now() + 24.hours();
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         destination: "Florianópolis".to_string(),
//!         starts_at,
//!         ends_at: starts_at + 96.hours(),
//!         emails_to_invite: vec!["bia@example.com".to_string()],
//!         owner_name: "Ana".to_string(),
//!         owner_email: "ana@example.com".to_string(),
//!     })
//!     .await?;
//! println!("{}", InZone(&trip, planner.time_zone()));
//!
//! let days = planner.get_activities(&Id { id: trip.id }).await?;
//! for day in &days {
//!     println!("{}: {} activities", day.date, day.activities.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod forms;
pub mod mail;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod validate;

// Re-export commonly used types
pub use config::LinkConfig;
pub use db::Database;
pub use display::{
    Agenda, CreateResult, InZone, Links, OperationStatus, Participants, TripHeadline, TripSummaries,
    UpdateResult,
};
pub use error::{Result, TripError};
pub use models::{Activity, DayActivities, Link, Participant, Trip, TripSummary};
pub use params::{CreateActivity, CreateInvite, CreateLink, CreateTrip, Id, UpdateTrip};
pub use planner::{TripConfirmation, TripPlanner, TripPlannerBuilder};
