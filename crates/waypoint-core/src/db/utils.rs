//! Row decoding helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, Result, TripError};

const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";

/// Reads an RFC 3339 timestamp stored as TEXT.
pub(crate) fn timestamp_at(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an INTEGER primary or foreign key.
pub(crate) fn id_at(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    row.get::<_, i64>(idx).map(|id| id as u64)
}

/// Fails with [`TripError::TripNotFound`] unless the trip exists.
pub(crate) fn ensure_trip_exists(connection: &Connection, trip_id: u64) -> Result<()> {
    let exists: bool = connection
        .query_row(CHECK_TRIP_EXISTS_SQL, [trip_id as i64], |row| row.get(0))
        .db_context("Failed to check trip existence")?;

    if exists {
        Ok(())
    } else {
        Err(TripError::TripNotFound { id: trip_id })
    }
}
