//! Short link entity stored by the link repository.

use chrono::{DateTime, Utc};

/// A stored short link: the original URL plus its visit metadata.
///
/// `original_url` and `created_at` are fixed at creation. `clicks` only moves
/// forward, one step per successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkEntry {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortLinkEntry {
    /// Creates a fresh entry with zero clicks, timestamped now.
    pub fn new(original_url: String) -> Self {
        Self {
            original_url,
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}
