mod common;

use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
}

#[tokio::test]
async fn test_health_counts_sessions() {
    let server = common::create_test_server();
    common::register(&server, "ada").await;

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["checks"]["sessions"]["message"], "Active sessions: 1");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::create_server_with(Arc::new(common::UnavailableStorage::new()));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
    assert!(json.get("version").is_some());
}
