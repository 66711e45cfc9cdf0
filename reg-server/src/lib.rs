pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    submissions::{
        save_submission_request::SaveSubmissionRequest,
        save_submission_response::SaveSubmissionResponse, submissions::save_to_sheets,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
