//! Builder for creating and configuring TripPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::tz::TimeZone;
use log::debug;
use tokio::task;

use super::TripPlanner;
use crate::{
    config::LinkConfig,
    db::Database,
    error::{Result, TripError},
    mail::{LogMailer, Mailer},
};

/// Builder for creating and configuring TripPlanner instances.
#[derive(Clone)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    mailer: Option<Arc<dyn Mailer>>,
    links: LinkConfig,
    tz: Option<TimeZone>,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            mailer: None,
            links: LinkConfig::default(),
            tz: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the mailer used for confirmation and invitation emails.
    /// Defaults to [`LogMailer`].
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Sets the base URLs used in emailed links and redirects.
    pub fn with_links(mut self, links: LinkConfig) -> Self {
        self.links = links;
        self
    }

    /// Sets the time zone used for calendar-day rules. Defaults to the
    /// system time zone.
    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the database directory cannot be
    /// created, `TripError::XdgDirectory` if the default path cannot be
    /// resolved, and `TripError::Database` if initialization fails.
    pub async fn build(self) -> Result<TripPlanner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TripError>(())
        })
        .await
        .map_err(TripError::join)??;

        debug!("Using database at {}", db_path.display());

        Ok(TripPlanner::new(
            db_path,
            self.mailer.unwrap_or_else(|| Arc::new(LogMailer)),
            self.links,
            self.tz.unwrap_or_else(TimeZone::system),
        ))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
