//! Business logic services for the application layer.

pub mod auth_service;
pub mod link_service;

pub use auth_service::AdminAuthService;
pub use link_service::{CodeSettings, CreatedLink, LinkService, Resolution};
