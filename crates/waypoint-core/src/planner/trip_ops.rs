//! Trip operations for the TripPlanner.

use log::info;
use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, TripError},
    mail::MailMessage,
    models::{Trip, TripSummary},
    params::{CreateTrip, Id, UpdateTrip},
    schedule,
};

/// Outcome of [`TripPlanner::confirm_trip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripConfirmation {
    /// Web page to redirect the owner to
    pub redirect_to: String,
    /// Guests emailed by this call, or `None` when the trip was already
    /// confirmed
    pub invited: Option<usize>,
}

impl TripPlanner {
    /// Creates a trip together with its owner and invited guests, then
    /// emails the owner a confirmation link.
    ///
    /// Guests are not emailed until the owner confirms the trip.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        params.validate(schedule::today(&self.tz), &self.tz)?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        let (trip, owner) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_trip(&params)
        })
        .await
        .map_err(TripError::join)??;

        info!("Created trip {} to {}", trip.id, trip.destination);

        let message = MailMessage::trip_confirmation(
            &trip,
            &owner,
            &self.links.trip_confirmation_url(trip.id),
            &self.tz,
        );
        self.deliver(vec![message]).await;

        Ok(trip)
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_trip(trip_id)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Lists every trip with its participant counts, newest first.
    pub async fn list_trips(&self) -> Result<Vec<TripSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_trips()
        })
        .await
        .map_err(TripError::join)?
    }

    /// Changes a trip's destination and dates.
    pub async fn update_trip(&self, params: &UpdateTrip) -> Result<Trip> {
        params.validate(schedule::today(&self.tz), &self.tz)?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        let trip = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_trip(&params)
        })
        .await
        .map_err(TripError::join)??;

        info!("Updated trip {}", trip.id);
        Ok(trip)
    }

    /// Confirms a trip and invites its guests.
    ///
    /// The first confirmation emails every guest a link to confirm their
    /// attendance; confirming again changes nothing and sends nothing.
    pub async fn confirm_trip(&self, params: &Id) -> Result<TripConfirmation> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        let confirmed = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            if !db.confirm_trip(trip_id)? {
                return Ok(None);
            }
            let trip = db
                .get_trip(trip_id)?
                .ok_or(TripError::TripNotFound { id: trip_id })?;
            let guests = db.get_guests(trip_id)?;
            Ok::<_, TripError>(Some((trip, guests)))
        })
        .await
        .map_err(TripError::join)??;

        let invited = match confirmed {
            Some((trip, guests)) => {
                info!("Confirmed trip {}, inviting {} guest(s)", trip.id, guests.len());

                let messages: Vec<_> = guests
                    .iter()
                    .map(|guest| {
                        MailMessage::trip_invitation(
                            &trip,
                            guest,
                            &self.links.participant_confirmation_url(guest.id),
                            &self.tz,
                        )
                    })
                    .collect();
                let count = messages.len();
                self.deliver(messages).await;
                Some(count)
            }
            None => None,
        };

        Ok(TripConfirmation {
            redirect_to: self.links.trip_page_url(trip_id),
            invited,
        })
    }
}
