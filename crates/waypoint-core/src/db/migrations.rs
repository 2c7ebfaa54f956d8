//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TripError};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite and must be enabled per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let version = self.schema_version()?;
        if version > SCHEMA_VERSION {
            return Err(TripError::Configuration {
                message: format!(
                    "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
                ),
            });
        }

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations(version)
    }

    /// Reads the schema version stored in the database file.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }

    /// Brings a database created at `from` up to [`SCHEMA_VERSION`].
    fn apply_migrations(&self, from: i64) -> Result<()> {
        if from < SCHEMA_VERSION {
            self.connection
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to record schema version")?;
        }

        Ok(())
    }
}
