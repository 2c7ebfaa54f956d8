//! Mapping of planner errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;
use waypoint_core::TripError;

/// Error body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors returned by request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be read: malformed JSON or path parameters
    BadRequest(String),
    /// The planner rejected or failed the operation
    Planner(TripError),
}

impl From<TripError> for ApiError {
    fn from(e: TripError) -> Self {
        ApiError::Planner(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Planner(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Planner(e) => {
                error!("Request failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
