//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are validated with `validator`; response DTOs use camelCase
//! field names on the wire.

pub mod admin;
pub mod health;
pub mod shorten;
pub mod stats;
