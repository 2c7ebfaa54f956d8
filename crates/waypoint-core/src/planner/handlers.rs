//! Operations that return display wrappers, used by the CLI.

use super::TripPlanner;
use crate::{
    display::{CreateResult, Links, Participants, TripSummaries, UpdateResult},
    error::{Result, TripError},
    models::{Activity, Link, Participant, Trip},
    params::{CreateActivity, CreateInvite, CreateLink, CreateTrip, Id, UpdateTrip},
};

impl TripPlanner {
    /// Lists trips wrapped for display.
    pub async fn list_trips_summary(&self) -> Result<TripSummaries> {
        Ok(TripSummaries::new(self.list_trips().await?, self.tz.clone()))
    }

    /// Creates a trip and wraps it for display.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waypoint_core::{params::CreateTrip, TripPlannerBuilder};
    /// # use jiff::{Timestamp, ToSpan};
    /// # async {
    /// let planner = TripPlannerBuilder::new().build().await?;
    /// let starts_at = Timestamp::now() + 24.hours();
    /// let result = planner
    ///     .create_trip_result(&CreateTrip {
    ///         destination: "Lisboa".to_string(),
    ///         starts_at,
    ///         ends_at: starts_at + 48.hours(),
    ///         emails_to_invite: vec![],
    ///         owner_name: "Ana".to_string(),
    ///         owner_email: "ana@example.com".to_string(),
    ///     })
    ///     .await?;
    /// println!("{result}");
    /// # Result::<(), waypoint_core::TripError>::Ok(())
    /// # };
    /// ```
    pub async fn create_trip_result(&self, params: &CreateTrip) -> Result<CreateResult<Trip>> {
        Ok(CreateResult::new(self.create_trip(params).await?, self.tz.clone()))
    }

    /// Updates a trip and lists what changed.
    pub async fn update_trip_result(&self, params: &UpdateTrip) -> Result<UpdateResult<Trip>> {
        let before = self
            .get_trip(&Id { id: params.trip_id })
            .await?
            .ok_or(TripError::TripNotFound { id: params.trip_id })?;

        let after = self.update_trip(params).await?;

        let mut changes = Vec::new();
        if before.destination != after.destination {
            changes.push(format!(
                "Changed destination from '{}' to '{}'",
                before.destination, after.destination
            ));
        }
        if before.starts_at != after.starts_at {
            changes.push("Moved start date".to_string());
        }
        if before.ends_at != after.ends_at {
            changes.push("Moved end date".to_string());
        }

        Ok(UpdateResult::with_changes(after, changes, self.tz.clone()))
    }

    pub async fn create_invite_result(
        &self,
        params: &CreateInvite,
    ) -> Result<CreateResult<Participant>> {
        Ok(CreateResult::new(self.create_invite(params).await?, self.tz.clone()))
    }

    /// Lists a trip's participants wrapped for display.
    pub async fn show_participants(&self, params: &Id) -> Result<Participants> {
        Ok(Participants(self.get_participants(params).await?))
    }

    pub async fn create_activity_result(
        &self,
        params: &CreateActivity,
    ) -> Result<CreateResult<Activity>> {
        Ok(CreateResult::new(self.create_activity(params).await?, self.tz.clone()))
    }

    pub async fn create_link_result(&self, params: &CreateLink) -> Result<CreateResult<Link>> {
        Ok(CreateResult::new(self.create_link(params).await?, self.tz.clone()))
    }

    /// Lists a trip's links wrapped for display.
    pub async fn show_links(&self, params: &Id) -> Result<Links> {
        Ok(Links(self.get_links(params).await?))
    }
}
