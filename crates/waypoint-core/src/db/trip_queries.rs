//! Trip CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{ensure_trip_exists, id_at, timestamp_at};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Participant, Trip, TripSummary},
    params::{CreateTrip, UpdateTrip},
};

const INSERT_TRIP_SQL: &str =
    "INSERT INTO trips (destination, starts_at, ends_at, is_confirmed, created_at) VALUES (?1, ?2, ?3, 0, ?4)";
const INSERT_PARTICIPANT_SQL: &str = "INSERT INTO participants (trip_id, name, email, is_confirmed, is_owner) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TRIP_SQL: &str =
    "SELECT id, destination, starts_at, ends_at, is_confirmed, created_at FROM trips WHERE id = ?1";
const SELECT_TRIP_SUMMARIES_SQL: &str = "SELECT id, destination, starts_at, ends_at, is_confirmed, created_at, total_participants, confirmed_participants FROM trip_summaries ORDER BY id DESC";
const UPDATE_TRIP_SQL: &str =
    "UPDATE trips SET destination = ?1, starts_at = ?2, ends_at = ?3 WHERE id = ?4";
const CONFIRM_TRIP_SQL: &str = "UPDATE trips SET is_confirmed = 1 WHERE id = ?1 AND is_confirmed = 0";

impl super::Database {
    /// Helper function to construct a Trip from a database row
    pub(crate) fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: id_at(row, 0)?,
            destination: row.get(1)?,
            starts_at: timestamp_at(row, 2)?,
            ends_at: timestamp_at(row, 3)?,
            is_confirmed: row.get(4)?,
            created_at: timestamp_at(row, 5)?,
        })
    }

    /// Creates a trip, its confirmed owner and one unconfirmed participant
    /// per invited email, all in one transaction.
    ///
    /// Returns the trip and its owner. Input is expected to be validated.
    pub fn create_trip(&mut self, params: &CreateTrip) -> Result<(Trip, Participant)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                params.destination,
                params.starts_at.to_string(),
                params.ends_at.to_string(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert trip")?;
        let trip_id = tx.last_insert_rowid() as u64;

        tx.execute(
            INSERT_PARTICIPANT_SQL,
            params![
                trip_id as i64,
                params.owner_name,
                params.owner_email,
                true,
                true
            ],
        )
        .db_context("Failed to insert trip owner")?;
        let owner_id = tx.last_insert_rowid() as u64;

        {
            let mut stmt = tx
                .prepare(INSERT_PARTICIPANT_SQL)
                .db_context("Failed to prepare participant insert")?;
            for email in &params.emails_to_invite {
                stmt.execute(params![trip_id as i64, None::<String>, email, false, false])
                    .db_context("Failed to insert invited participant")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        let trip = Trip {
            id: trip_id,
            destination: params.destination.clone(),
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            is_confirmed: false,
            created_at: now,
        };
        let owner = Participant {
            id: owner_id,
            trip_id,
            name: Some(params.owner_name.clone()),
            email: params.owner_email.clone(),
            is_confirmed: true,
            is_owner: true,
        };

        Ok((trip, owner))
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        self.connection
            .query_row(SELECT_TRIP_SQL, params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists every trip with participant counts, newest first.
    pub fn list_trips(&self) -> Result<Vec<TripSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(TripSummary {
                    id: id_at(row, 0)?,
                    destination: row.get(1)?,
                    starts_at: timestamp_at(row, 2)?,
                    ends_at: timestamp_at(row, 3)?,
                    is_confirmed: row.get(4)?,
                    created_at: timestamp_at(row, 5)?,
                    total_participants: row.get(6)?,
                    confirmed_participants: row.get(7)?,
                })
            })
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        Ok(summaries)
    }

    /// Replaces a trip's destination and dates.
    ///
    /// Returns the updated trip, or `TripNotFound` when the trip is missing.
    pub fn update_trip(&mut self, params: &UpdateTrip) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_trip_exists(&tx, params.trip_id)?;

        tx.execute(
            UPDATE_TRIP_SQL,
            params![
                params.destination,
                params.starts_at.to_string(),
                params.ends_at.to_string(),
                params.trip_id as i64
            ],
        )
        .db_context("Failed to update trip")?;

        let trip = tx
            .query_row(
                SELECT_TRIP_SQL,
                params![params.trip_id as i64],
                Self::build_trip_from_row,
            )
            .db_context("Failed to query updated trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(trip)
    }

    /// Marks a trip as confirmed.
    ///
    /// Returns `true` when the trip changed state and `false` when it was
    /// already confirmed.
    pub fn confirm_trip(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_trip_exists(&tx, id)?;

        let rows_affected = tx
            .execute(CONFIRM_TRIP_SQL, params![id as i64])
            .db_context("Failed to confirm trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows_affected > 0)
    }
}
