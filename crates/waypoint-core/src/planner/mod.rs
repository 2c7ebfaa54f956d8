//! High-level async API for trips, guests, activities and links.
//!
//! [`TripPlanner`] is the single entry point used by the CLI and the HTTP
//! server. Every operation validates its parameters, runs the blocking SQLite
//! work on tokio's blocking pool, and sends any resulting email through the
//! configured [`Mailer`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display types) │───▶│ (*_ops modules) │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │     Mailer      │
//!                        └─────────────────┘
//! ```
//!
//! - [`builder`]: creates [`TripPlanner`] instances
//! - [`trip_ops`], [`participant_ops`], [`activity_ops`], [`link_ops`]: one
//!   module of operations per resource
//! - [`handlers`]: operations that return display wrappers for the CLI
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jiff::{tz::TimeZone, ToSpan, Timestamp};
//! use waypoint_core::{mail::MemoryMailer, params::CreateTrip, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mailer = Arc::new(MemoryMailer::new());
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .with_mailer(mailer.clone())
//!     .with_time_zone(TimeZone::UTC)
//!     .build()
//!     .await?;
//!
//! let starts_at = Timestamp::now() + 48.hours();
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         destination: "Florianópolis".to_string(),
//!         starts_at,
//!         ends_at: starts_at + 72.hours(),
//!         emails_to_invite: vec!["guest@example.com".to_string()],
//!         owner_name: "Ana".to_string(),
//!         owner_email: "ana@example.com".to_string(),
//!     })
//!     .await?;
//!
//! assert_eq!(mailer.sent().len(), 1);
//! # let _ = trip;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::tz::TimeZone;
use log::warn;
use tokio::task;

use crate::{
    config::LinkConfig,
    mail::{MailMessage, Mailer},
};

pub mod activity_ops;
pub mod builder;
pub mod handlers;
pub mod link_ops;
pub mod participant_ops;
pub mod trip_ops;


pub use builder::TripPlannerBuilder;
pub use trip_ops::TripConfirmation;

/// Main planner interface for managing trips.
pub struct TripPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) mailer: Arc<dyn Mailer>,
    pub(crate) links: LinkConfig,
    pub(crate) tz: TimeZone,
}

impl TripPlanner {
    pub(crate) fn new(
        db_path: PathBuf,
        mailer: Arc<dyn Mailer>,
        links: LinkConfig,
        tz: TimeZone,
    ) -> Self {
        Self {
            db_path,
            mailer,
            links,
            tz,
        }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Time zone used to turn instants into calendar days.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    pub fn links(&self) -> &LinkConfig {
        &self.links
    }

    /// Sends `messages` on the blocking pool. Failures are logged and
    /// otherwise ignored.
    pub(crate) async fn deliver(&self, messages: Vec<MailMessage>) {
        if messages.is_empty() {
            return;
        }

        let mailer = Arc::clone(&self.mailer);
        let outcome = task::spawn_blocking(move || {
            for message in &messages {
                if let Err(e) = mailer.send(message) {
                    warn!("Failed to send mail to {}: {e}", message.to_address);
                }
            }
        })
        .await;

        if let Err(e) = outcome {
            warn!("Mail delivery task failed: {e}");
        }
    }
}
