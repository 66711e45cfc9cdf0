//! Submission REST API handler
//!
//! One write path: flatten the posted submission into rows and append them
//! to the configured store in a single batch.

use crate::{ApiError, ApiResult, AppState, SaveSubmissionRequest, SaveSubmissionResponse};

use reg_sheets::flatten_rows;

use axum::{Json, extract::State};
use log::info;

/// POST /save-to-sheets
///
/// Accepts `{ "data": { teamName, fullName, rollNo, email, branch,
/// teamMembers } }` and appends one row per person. The whole batch goes to
/// the store in one call, so a submission's rows stay contiguous.
pub async fn save_to_sheets(
    State(state): State<AppState>,
    Json(request): Json<SaveSubmissionRequest>,
) -> ApiResult<Json<SaveSubmissionResponse>> {
    let Some(data) = request.data else {
        return Err(ApiError::missing_data());
    };

    let rows = flatten_rows(&data);
    info!(
        "Appending {} row(s) for team \"{}\"",
        rows.len(),
        data.team_name
    );

    state.appender.append(rows).await?;

    Ok(Json(SaveSubmissionResponse {
        message: "Data saved successfully to Google Sheets".to_string(),
    }))
}
