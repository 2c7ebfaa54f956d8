//! Participant queries: guests, invitations and confirmations.

use rusqlite::{params, OptionalExtension};

use super::utils::{ensure_trip_exists, id_at};
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::Participant,
};

const INSERT_GUEST_SQL: &str =
    "INSERT INTO participants (trip_id, name, email, is_confirmed, is_owner) VALUES (?1, NULL, ?2, 0, 0)";
const SELECT_PARTICIPANT_SQL: &str =
    "SELECT id, trip_id, name, email, is_confirmed, is_owner FROM participants WHERE id = ?1";
const SELECT_PARTICIPANTS_BY_TRIP_SQL: &str =
    "SELECT id, trip_id, name, email, is_confirmed, is_owner FROM participants WHERE trip_id = ?1 ORDER BY id";
const SELECT_GUESTS_BY_TRIP_SQL: &str = "SELECT id, trip_id, name, email, is_confirmed, is_owner FROM participants WHERE trip_id = ?1 AND is_owner = 0 ORDER BY id";
const CONFIRM_PARTICIPANT_SQL: &str = "UPDATE participants SET is_confirmed = 1 WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Participant from a database row
    fn build_participant_from_row(row: &rusqlite::Row) -> rusqlite::Result<Participant> {
        Ok(Participant {
            id: id_at(row, 0)?,
            trip_id: id_at(row, 1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            is_confirmed: row.get(4)?,
            is_owner: row.get(5)?,
        })
    }

    /// Invites a guest by email. The guest starts unconfirmed and nameless.
    pub fn add_guest(&mut self, trip_id: u64, email: &str) -> Result<Participant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_trip_exists(&tx, trip_id)?;

        tx.execute(INSERT_GUEST_SQL, params![trip_id as i64, email])
            .db_context("Failed to insert participant")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Participant {
            id,
            trip_id,
            name: None,
            email: email.to_string(),
            is_confirmed: false,
            is_owner: false,
        })
    }

    /// Retrieves a participant by its ID.
    pub fn get_participant(&self, id: u64) -> Result<Option<Participant>> {
        self.connection
            .query_row(
                SELECT_PARTICIPANT_SQL,
                params![id as i64],
                Self::build_participant_from_row,
            )
            .optional()
            .db_context("Failed to query participant")
    }

    /// Lists the owner and guests of a trip in invitation order.
    pub fn get_participants(&self, trip_id: u64) -> Result<Vec<Participant>> {
        ensure_trip_exists(&self.connection, trip_id)?;
        self.query_participants(SELECT_PARTICIPANTS_BY_TRIP_SQL, trip_id)
    }

    /// Lists only the invited guests of a trip, without its owner.
    pub fn get_guests(&self, trip_id: u64) -> Result<Vec<Participant>> {
        ensure_trip_exists(&self.connection, trip_id)?;
        self.query_participants(SELECT_GUESTS_BY_TRIP_SQL, trip_id)
    }

    fn query_participants(&self, sql: &str, trip_id: u64) -> Result<Vec<Participant>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let participants = stmt
            .query_map(params![trip_id as i64], Self::build_participant_from_row)
            .db_context("Failed to query participants")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch participants")?;

        Ok(participants)
    }

    /// Marks a participant as confirmed. Confirming twice is harmless.
    ///
    /// Returns the participant as it was before the update so callers can
    /// tell whether anything changed.
    pub fn confirm_participant(&mut self, id: u64) -> Result<Participant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let participant = tx
            .query_row(
                SELECT_PARTICIPANT_SQL,
                params![id as i64],
                Self::build_participant_from_row,
            )
            .optional()
            .db_context("Failed to query participant")?
            .ok_or(TripError::ParticipantNotFound { id })?;

        if !participant.is_confirmed {
            tx.execute(CONFIRM_PARTICIPANT_SQL, params![id as i64])
                .db_context("Failed to confirm participant")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(participant)
    }
}
