//! Infrastructure layer implementing the domain storage contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations
//!
//! Nothing in this layer survives a restart: the service keeps its short links
//! in process memory only.

pub mod persistence;
