//! HTTP server initialization and runtime setup.
//!
//! Builds the shared store and services, then runs the Axum server until a
//! shutdown signal arrives.

use crate::application::services::{AdminAuthService, LinkService};
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state around a fresh, empty store.
///
/// This is the only place the store is created; every handler reaches it
/// through the returned state.
pub fn build_state(config: &Config) -> AppState {
    let repository = Arc::new(InMemoryLinkRepository::new());

    let link_service = Arc::new(LinkService::new(
        repository,
        config.base_url.clone(),
        config.code_settings(),
    ));

    let admin_auth = Arc::new(AdminAuthService::new(
        config.admin_password.as_deref(),
        config.admin_signing_secret.as_bytes(),
    ));

    AppState::new(link_service, admin_auth)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("In-memory link store ready");

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
