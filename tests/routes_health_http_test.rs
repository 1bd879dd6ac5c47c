// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Verifies liveness, readiness, request-id propagation, and unknown paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use fittrack::config::ServerConfig;
use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health")
        .send(common::test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fittrack-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready")
        .send(common::test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = AxumTestRequest::get("/api/nope")
        .send(common::test_router())
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let app = common::test_app(ServerConfig::default());

    let generated = AxumTestRequest::get("/health").send(app.clone()).await;
    assert!(generated.header("x-request-id").is_some());

    let echoed = AxumTestRequest::get("/health")
        .header("x-request-id", "req-1234")
        .send(app)
        .await;
    assert_eq!(echoed.header("x-request-id").as_deref(), Some("req-1234"));
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let config = ServerConfig {
        cors_origins: vec!["https://app.fittrack.example".to_owned()],
        ..ServerConfig::default()
    };
    let response = AxumTestRequest::options("/api/nutrition/targets")
        .header("origin", "https://app.fittrack.example")
        .header("access-control-request-method", "POST")
        .send(common::test_app(config))
        .await;

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("https://app.fittrack.example")
    );
}
