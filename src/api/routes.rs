//! API route configuration.

use crate::api::handlers::{admin_auth_handler, health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short link
/// - `GET  /health`   - Service health
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}

/// Admin password check.
///
/// # Endpoints
///
/// - `POST /admin/auth` - Check an admin password sent in the body
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/auth", post(admin_auth_handler))
}

/// Routes requiring the admin bearer password via [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET /stats/{code}` - Per-link statistics
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/stats/{code}", get(stats_handler))
}
