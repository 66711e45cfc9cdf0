use crate::{api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// The application router: the submission endpoint plus health probes
pub fn build_router(state: AppState) -> Router {
    // The form posts from a different origin, so CORS stays wide open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/save-to-sheets",
            post(api::submissions::submissions::save_to_sheets),
        )
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(cors)
}
