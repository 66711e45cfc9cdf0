use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("HTTP error talking to the sheets API: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Service-account key rejected: {source} {location}")]
    Key {
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token grant failed: {message} {location}")]
    Token {
        message: String,
        location: ErrorLocation,
    },

    #[error("Append rejected with status {status}: {message} {location}")]
    Append {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for SheetsError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for SheetsError {
    #[track_caller]
    fn from(source: jsonwebtoken::errors::Error) -> Self {
        Self::Key {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetsError>;
