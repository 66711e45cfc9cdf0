use crate::client::error::{GatewayError, Result as GatewayResult};

use reg_core::{Submission, SubmissionDto};

use reqwest::Client as ReqwestClient;
use serde::Serialize;

/// HTTP gateway that posts validated submissions to the backend
pub struct Gateway {
    pub base_url: String,
    client: ReqwestClient,
}

impl Gateway {
    /// Create a new gateway
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// POST a submission to /save-to-sheets and await the outcome.
    ///
    /// The submission is expected to have passed form validation. There is
    /// no retry and no in-flight deduplication here; the form's submitting
    /// flag is the only guard against repeated attempts.
    pub async fn submit(&self, submission: &Submission) -> GatewayResult<()> {
        #[derive(Serialize)]
        struct SaveRequest<'a> {
            data: &'a SubmissionDto,
        }

        let data = SubmissionDto::from(submission);
        let url = format!("{}/save-to-sheets", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SaveRequest { data: &data })
            .send()
            .await
            .map_err(|_| GatewayError::submission_failed())?;

        if !response.status().is_success() {
            return Err(GatewayError::submission_failed());
        }

        Ok(())
    }
}
