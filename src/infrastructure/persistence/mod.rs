//! Storage implementations of the domain repository traits.

mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
