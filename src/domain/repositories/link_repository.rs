//! Repository trait for short link storage.

use crate::domain::entities::ShortLinkEntry;

/// Storage contract for short code to URL mappings.
///
/// All operations are in-memory and complete synchronously. Implementations
/// must be safe to share between request handlers running concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-lifetime map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Stores `original_url` under `code` with zero clicks and a fresh timestamp.
    ///
    /// Silently replaces an existing entry with the same code. Callers are
    /// expected to check [`Self::exists`] first.
    fn insert(&self, code: &str, original_url: &str);

    /// Looks up `code` and, when found, counts the visit.
    ///
    /// Every successful call increments the entry's click counter by exactly
    /// one before the URL is returned. Returns `None` for unknown codes.
    fn resolve_and_count(&self, code: &str) -> Option<String>;

    /// Checks whether `code` is taken. Never touches the click counter.
    fn exists(&self, code: &str) -> bool;

    /// Returns a snapshot of the entry for `code` without counting a visit.
    fn stats(&self, code: &str) -> Option<ShortLinkEntry>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` when nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
