//! HTTP middleware for request processing and protection.
//!
//! Provides the admin gate, rate limiting, panic recovery and observability.

pub mod auth;
pub mod panic;
pub mod rate_limit;
pub mod tracing;
