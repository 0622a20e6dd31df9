//! # free-tools short links
//!
//! The URL shortener of the free-tools site, built with Axum on top of an
//! in-memory store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and the store trait
//! - **Application Layer** ([`application`]) - Code allocation, resolution, admin gate
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric codes with bounded collision retry
//! - HTTP(S)-only URL validation
//! - Click counting on every redirect
//! - Admin-gated per-link statistics
//! - Rate limiting and structured logging
//!
//! ## Storage
//!
//! Links live in process memory for the lifetime of the server and are lost
//! on restart. There is no expiry or capacity bound.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://tools.example.com"
//! export ADMIN_PASSWORD="change-me"   # Optional, enables /api/stats
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AdminAuthService, LinkService, Resolution};
    pub use crate::domain::entities::ShortLinkEntry;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
