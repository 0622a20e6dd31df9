//! DTOs for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLinkEntry;

/// Stored metadata of a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl StatsResponse {
    pub fn from_entry(short_code: String, entry: ShortLinkEntry) -> Self {
        Self {
            short_code,
            original_url: entry.original_url,
            created_at: entry.created_at,
            clicks: entry.clicks,
        }
    }
}
