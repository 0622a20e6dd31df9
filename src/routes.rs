//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /s/{code}`          - Short link redirect (public)
//! - `GET  /s`                 - Missing code error (public)
//! - `POST /api/shorten`       - Create a short link (public)
//! - `GET  /api/health`        - Health check (public)
//! - `POST /api/admin/auth`    - Admin password check
//! - `GET  /api/stats/{code}`  - Per-link statistics (admin bearer password)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 { "error": "Internal server error" }`
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Admin gate** - Bearer admin password on statistics
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{missing_code_handler, redirect_handler};
use crate::api::middleware::{auth, panic, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let admin_router = Router::new()
        .merge(protected)
        .merge(api::routes::admin_routes())
        .layer(rate_limit::secure_layer(behind_proxy));

    let api_router = Router::new()
        .merge(api::routes::public_routes().layer(rate_limit::layer(behind_proxy)))
        .merge(admin_router);

    let short_links = Router::new()
        .route("/s", get(missing_code_handler))
        .route("/s/{code}", get(redirect_handler))
        .layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .merge(short_links)
        .nest("/api", api_router)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
