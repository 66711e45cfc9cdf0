//! REST API error types
//!
//! These errors are designed to produce the endpoint's flat JSON error
//! responses with appropriate HTTP status codes.

use reg_sheets::SheetsError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed submission envelope (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// The store rejected the append (500)
    #[error("Append failed: {message} {location}")]
    Append {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// The request body carried no `data` object
    #[track_caller]
    pub fn missing_data() -> Self {
        ApiError::BadRequest {
            message: "Missing data in request body".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Append { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert store errors to API errors
impl From<SheetsError> for ApiError {
    #[track_caller]
    fn from(e: SheetsError) -> Self {
        // The underlying cause stays server-side; clients get an opaque 500
        log::error!("Error appending data to sheet: {}", e);
        ApiError::Append {
            message: "Failed to save data to Google Sheets".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
