//! Health endpoint tests
mod common;

use crate::common::{RecordingAppender, create_test_state};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use reg_server::routes::build_router;

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let app = build_router(create_test_state(Arc::new(RecordingAppender::default())));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    for uri in ["/live", "/ready"] {
        let app = build_router(create_test_state(Arc::new(RecordingAppender::default())));

        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
