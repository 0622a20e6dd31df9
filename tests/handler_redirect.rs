mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use free_tools::api::handlers::{missing_code_handler, redirect_handler};
use free_tools::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/s", get(missing_code_handler))
        .route("/s/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com/target");
    let server = server(state);

    let response = server.get(&format!("/s/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com/page");
    let server = server(state.clone());

    server.get(&format!("/s/{code}")).await;
    assert_eq!(state.link_service.get_stats(&code).unwrap().clicks, 1);

    server.get(&format!("/s/{code}")).await;
    server.get(&format!("/s/{code}")).await;
    assert_eq!(state.link_service.get_stats(&code).unwrap().clicks, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = server(common::create_test_state());

    let response = server.get("/s/ZZZZZZ").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL not found" })
    );
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com");
    let flipped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();
    let server = server(state.clone());

    // Digits-only codes flip to themselves.
    if flipped != code {
        server.get(&format!("/s/{flipped}")).await.assert_status_not_found();
    }
    assert_eq!(state.link_service.get_stats(&code).unwrap().clicks, 0);
}

#[tokio::test]
async fn test_redirect_missing_code() {
    let server = server(common::create_test_state());

    let response = server.get("/s").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing shortCode" })
    );
}

#[tokio::test]
async fn test_redirect_unknown_does_not_create_entry() {
    let state = common::create_test_state();
    let server = server(state.clone());

    server.get("/s/abcdef").await.assert_status_not_found();

    assert_eq!(state.link_service.link_count(), 0);
}
