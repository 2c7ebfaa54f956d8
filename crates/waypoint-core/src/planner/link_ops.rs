//! Link operations for the TripPlanner.

use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, TripError},
    models::Link,
    params::{CreateLink, Id},
};

impl TripPlanner {
    /// Shares a link with everyone on a trip.
    pub async fn create_link(&self, params: &CreateLink) -> Result<Link> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_link(params.trip_id, &params.title, &params.url)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Lists a trip's links in the order they were added.
    pub async fn get_links(&self, params: &Id) -> Result<Vec<Link>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_links(trip_id)
        })
        .await
        .map_err(TripError::join)?
    }
}
