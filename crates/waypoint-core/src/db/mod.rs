//! Database operations and SQLite management for trips.
//!
//! This module provides the low-level persistence layer of the trip planner.
//! It owns the SQLite connection, keeps the schema current, and exposes one
//! query module per resource: trips, participants, activities and links.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod link_queries;
pub mod migrations;
pub mod participant_queries;
pub mod trip_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
