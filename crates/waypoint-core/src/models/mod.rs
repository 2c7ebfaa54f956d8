//! Data models for trips and everything attached to them.
//!
//! A [`Trip`] owns its [`Participant`]s (exactly one owner plus invited
//! guests), its scheduled [`Activity`] entries and its shared [`Link`]s.
//! Display implementations live in [`crate::display::models`] so the data
//! structures stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{display::InZone, models::Trip};
//! use jiff::{tz::TimeZone, Timestamp};
//!
//! let trip = Trip {
//!     id: 1,
//!     destination: "Florianópolis".to_string(),
//!     starts_at: "2030-01-10T12:00:00Z".parse::<Timestamp>()?,
//!     ends_at: "2030-01-14T12:00:00Z".parse::<Timestamp>()?,
//!     is_confirmed: false,
//!     created_at: Timestamp::now(),
//! };
//! println!("{}", InZone(&trip, &TimeZone::UTC)); // Markdown with times in UTC
//! # Ok::<(), jiff::Error>(())
//! ```

pub mod activity;
pub mod link;
pub mod participant;
pub mod summary;
pub mod trip;


pub use activity::{Activity, DayActivities};
pub use link::Link;
pub use participant::Participant;
pub use summary::TripSummary;
pub use trip::Trip;
