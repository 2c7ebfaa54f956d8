//! Activity queries.

use jiff::Timestamp;
use rusqlite::params;

use super::utils::{ensure_trip_exists, id_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Activity,
};

const INSERT_ACTIVITY_SQL: &str =
    "INSERT INTO activities (trip_id, title, occurs_at) VALUES (?1, ?2, ?3)";
const SELECT_ACTIVITIES_BY_TRIP_SQL: &str =
    "SELECT id, trip_id, title, occurs_at FROM activities WHERE trip_id = ?1";

impl super::Database {
    /// Schedules an activity on a trip.
    pub fn add_activity(
        &mut self,
        trip_id: u64,
        title: &str,
        occurs_at: Timestamp,
    ) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_trip_exists(&tx, trip_id)?;

        tx.execute(
            INSERT_ACTIVITY_SQL,
            params![trip_id as i64, title, occurs_at.to_string()],
        )
        .db_context("Failed to insert activity")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Activity {
            id,
            trip_id,
            title: title.to_string(),
            occurs_at,
        })
    }

    /// Lists a trip's activities ordered by when they occur.
    pub fn get_activities(&self, trip_id: u64) -> Result<Vec<Activity>> {
        ensure_trip_exists(&self.connection, trip_id)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let mut activities = stmt
            .query_map(params![trip_id as i64], |row| {
                Ok(Activity {
                    id: id_at(row, 0)?,
                    trip_id: id_at(row, 1)?,
                    title: row.get(2)?,
                    occurs_at: timestamp_at(row, 3)?,
                })
            })
            .db_context("Failed to query activities")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch activities")?;

        // Stored text may carry fractional seconds, so order on parsed instants
        activities.sort_by_key(|activity| (activity.occurs_at, activity.id));
        Ok(activities)
    }
}
