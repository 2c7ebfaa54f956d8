//! Participant operations for the TripPlanner.

use log::info;
use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, TripError},
    mail::MailMessage,
    models::Participant,
    params::{CreateInvite, Id},
};

impl TripPlanner {
    /// Invites one more guest to a trip and emails them straight away.
    pub async fn create_invite(&self, params: &CreateInvite) -> Result<Participant> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        let (trip, guest) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let trip = db
                .get_trip(params.trip_id)?
                .ok_or(TripError::TripNotFound { id: params.trip_id })?;
            let guest = db.add_guest(trip.id, &params.email)?;
            Ok::<_, TripError>((trip, guest))
        })
        .await
        .map_err(TripError::join)??;

        info!("Invited participant {} to trip {}", guest.id, trip.id);

        let message = MailMessage::trip_invitation(
            &trip,
            &guest,
            &self.links.participant_confirmation_url(guest.id),
            &self.tz,
        );
        self.deliver(vec![message]).await;

        Ok(guest)
    }

    /// Lists a trip's owner and guests in invitation order.
    pub async fn get_participants(&self, params: &Id) -> Result<Vec<Participant>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_participants(trip_id)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Retrieves a participant by its ID.
    pub async fn get_participant(&self, params: &Id) -> Result<Option<Participant>> {
        let db_path = self.db_path.clone();
        let participant_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_participant(participant_id)
        })
        .await
        .map_err(TripError::join)?
    }

    /// Confirms a guest's attendance. Confirming twice is harmless.
    ///
    /// Returns the web page of the guest's trip to redirect them to.
    pub async fn confirm_participant(&self, params: &Id) -> Result<String> {
        let db_path = self.db_path.clone();
        let participant_id = params.id;

        let participant = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.confirm_participant(participant_id)
        })
        .await
        .map_err(TripError::join)??;

        if !participant.is_confirmed {
            info!(
                "Participant {} confirmed trip {}",
                participant.id, participant.trip_id
            );
        }

        Ok(self.links.trip_page_url(participant.trip_id))
    }
}
