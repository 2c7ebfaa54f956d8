//! Link queries.

use rusqlite::params;

use super::utils::{ensure_trip_exists, id_at};
use crate::{
    error::{DatabaseResultExt, Result},
    models::Link,
};

const INSERT_LINK_SQL: &str = "INSERT INTO links (trip_id, title, url) VALUES (?1, ?2, ?3)";
const SELECT_LINKS_BY_TRIP_SQL: &str =
    "SELECT id, trip_id, title, url FROM links WHERE trip_id = ?1 ORDER BY id";

impl super::Database {
    /// Shares a link with everyone on a trip.
    pub fn add_link(&mut self, trip_id: u64, title: &str, url: &str) -> Result<Link> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_trip_exists(&tx, trip_id)?;

        tx.execute(INSERT_LINK_SQL, params![trip_id as i64, title, url])
            .db_context("Failed to insert link")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Link {
            id,
            trip_id,
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    /// Lists a trip's links in the order they were added.
    pub fn get_links(&self, trip_id: u64) -> Result<Vec<Link>> {
        ensure_trip_exists(&self.connection, trip_id)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_LINKS_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let links = stmt
            .query_map(params![trip_id as i64], |row| {
                Ok(Link {
                    id: id_at(row, 0)?,
                    trip_id: id_at(row, 1)?,
                    title: row.get(2)?,
                    url: row.get(3)?,
                })
            })
            .db_context("Failed to query links")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch links")?;

        Ok(links)
    }
}
