//! Activity operations for the TripPlanner.

use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, TripError},
    models::{Activity, DayActivities},
    params::{CreateActivity, Id},
    schedule,
};

impl TripPlanner {
    /// Schedules an activity within the bounds of its trip.
    pub async fn create_activity(&self, params: &CreateActivity) -> Result<Activity> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let trip = db
                .get_trip(params.trip_id)?
                .ok_or(TripError::TripNotFound { id: params.trip_id })?;
            params.validate(&trip)?;
            db.add_activity(trip.id, &params.title, params.occurs_at)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Returns a trip's activities grouped by calendar day, one entry for
    /// every day of the trip.
    pub async fn get_activities(&self, params: &Id) -> Result<Vec<DayActivities>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;
        let tz = self.tz.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let trip = db
                .get_trip(trip_id)?
                .ok_or(TripError::TripNotFound { id: trip_id })?;
            let activities = db.get_activities(trip_id)?;
            Ok::<_, TripError>(schedule::group_by_day(&trip, activities, &tz))
        })
        .await
        .map_err(TripError::join)?
    }
}
