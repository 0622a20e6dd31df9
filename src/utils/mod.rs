//! Helper functions shared by the services.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - HTTP(S) URL validation

pub mod code_generator;
pub mod url_validator;
