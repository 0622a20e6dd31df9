//! Core domain entities.
//!
//! Entities are plain data structures without storage concerns. The only one
//! in this service is [`ShortLinkEntry`], the record kept for each short code.

pub mod link;

pub use link::ShortLinkEntry;
