//! Liveness and readiness.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_health_detailed() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], "ok");
    assert_eq!(response.body["cache"], "ok");
    assert_eq!(response.body["storage"], "ok");
}
