//! Domain layer containing the short link entity and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or API layers.
//! Business rules (code generation, URL validation, resolution) live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
