use reg_core::SubmissionDto;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveSubmissionRequest {
    /// The submission envelope; absence is a 400, not a deserialization error
    #[serde(default)]
    pub data: Option<SubmissionDto>,
}
