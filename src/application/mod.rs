//! Application layer services implementing business logic.
//!
//! Services consume the repository traits and give HTTP handlers a small,
//! synchronous API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and stats
//! - [`services::auth_service::AdminAuthService`] - Admin password gate

pub mod services;
