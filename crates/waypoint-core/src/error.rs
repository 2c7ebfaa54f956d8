//! Error types for the trip planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all trip planner operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trip not found for the given ID
    #[error("Trip not found")]
    TripNotFound { id: u64 },
    /// Participant not found for the given ID
    #[error("Participant not found")]
    ParticipantNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Outgoing mail could not be delivered
    #[error("Mail delivery to '{recipient}' failed: {reason}")]
    Mail { recipient: String, reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller rather than the service.
    ///
    /// Unknown resources count as client errors: the caller supplied an ID
    /// that does not exist.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TripError::InvalidInput { .. }
                | TripError::TripNotFound { .. }
                | TripError::ParticipantNotFound { .. }
        )
    }

    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        TripError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for trip planner operations
pub type Result<T> = std::result::Result<T, TripError>;
