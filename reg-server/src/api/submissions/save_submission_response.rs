use serde::Serialize;

/// Success acknowledgement for a saved submission
#[derive(Debug, Serialize)]
pub struct SaveSubmissionResponse {
    pub message: String,
}
