mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use free_tools::api::handlers::admin_auth_handler;
use free_tools::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/admin/auth", post(admin_auth_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_admin_auth_success() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/admin/auth")
        .json(&json!({ "password": common::ADMIN_PASSWORD }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "success": true })
    );
}

#[tokio::test]
async fn test_admin_auth_wrong_password() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/admin/auth")
        .json(&json!({ "password": "guess" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid password" })
    );
}

#[tokio::test]
async fn test_admin_auth_missing_password() {
    let server = server(common::create_test_state());

    for body in [json!({}), json!({ "password": 1234 })] {
        let response = server.post("/api/admin/auth").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"],
            "Password is required"
        );
    }
}

#[tokio::test]
async fn test_admin_auth_not_configured() {
    let server = server(common::create_state_without_admin());

    let response = server
        .post("/api/admin/auth")
        .json(&json!({ "password": "anything" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
