use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while submitting a registration.
///
/// A rejected response and a transport failure (timeout, connection error,
/// DNS) deliberately collapse into the same variant: the caller only learns
/// that the submission failed and must resubmit.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Submission failed {location}")]
    SubmissionFailed { location: ErrorLocation },
}

impl GatewayError {
    #[track_caller]
    pub fn submission_failed() -> Self {
        GatewayError::SubmissionFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
