//! In-memory implementation of [`LinkRepository`].

use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::ShortLinkEntry;
use crate::domain::repositories::LinkRepository;

/// Process-lifetime short link store backed by a sharded concurrent map.
///
/// Entries are never evicted and are lost on restart. Writes lock only the
/// shard holding the affected code, so concurrent writes to different codes
/// never interfere, and a click increment is atomic with respect to other
/// lookups of the same code.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, ShortLinkEntry>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn insert(&self, code: &str, original_url: &str) {
        let replaced = self
            .links
            .insert(code.to_string(), ShortLinkEntry::new(original_url.to_string()));

        if replaced.is_some() {
            debug!(code, "Replaced existing short link entry");
        }
    }

    fn resolve_and_count(&self, code: &str) -> Option<String> {
        self.links.get_mut(code).map(|mut entry| {
            entry.clicks += 1;
            entry.original_url.clone()
        })
    }

    fn exists(&self, code: &str) -> bool {
        self.links.contains_key(code)
    }

    fn stats(&self, code: &str) -> Option<ShortLinkEntry> {
        self.links.get(code).map(|entry| entry.clone())
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_then_stats() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://example.com/page");

        let entry = repo.stats("abc123").unwrap();
        assert_eq!(entry.original_url, "https://example.com/page");
        assert_eq!(entry.clicks, 0);
    }

    #[test]
    fn test_resolve_counts_each_visit() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://example.com");

        assert_eq!(
            repo.resolve_and_count("abc123").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(repo.stats("abc123").unwrap().clicks, 1);

        repo.resolve_and_count("abc123");
        repo.resolve_and_count("abc123");
        assert_eq!(repo.stats("abc123").unwrap().clicks, 3);
    }

    #[test]
    fn test_resolve_unknown_code() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.resolve_and_count("ZZZZZZ").is_none());
        assert!(repo.stats("ZZZZZZ").is_none());
    }

    #[test]
    fn test_exists_does_not_count() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://example.com");

        assert!(repo.exists("abc123"));
        assert!(repo.exists("abc123"));
        assert!(!repo.exists("other1"));
        assert_eq!(repo.stats("abc123").unwrap().clicks, 0);
    }

    #[test]
    fn test_stats_does_not_count() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://example.com");

        repo.stats("abc123");
        repo.stats("abc123");
        assert_eq!(repo.stats("abc123").unwrap().clicks, 0);
    }

    #[test]
    fn test_insert_overwrites_silently() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://first.example.com");
        repo.resolve_and_count("abc123");

        repo.insert("abc123", "https://second.example.com");

        let entry = repo.stats("abc123").unwrap();
        assert_eq!(entry.original_url, "https://second.example.com");
        assert_eq!(entry.clicks, 0);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("AbC123", "https://example.com");

        assert!(repo.exists("AbC123"));
        assert!(!repo.exists("abc123"));
    }

    #[test]
    fn test_len_and_is_empty() {
        let repo = InMemoryLinkRepository::new();
        assert!(repo.is_empty());

        repo.insert("a", "https://a.example.com");
        repo.insert("b", "https://b.example.com");

        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_concurrent_resolves_are_all_counted() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.insert("hot123", "https://example.com");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        repo.resolve_and_count("hot123");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.stats("hot123").unwrap().clicks, 2000);
    }

    #[test]
    fn test_concurrent_inserts_keep_unrelated_entries() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = repo.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        let code = format!("t{t}c{i}");
                        repo.insert(&code, &format!("https://example.com/{t}/{i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.len(), 800);
        assert_eq!(
            repo.stats("t3c42").unwrap().original_url,
            "https://example.com/3/42"
        );
    }
}
