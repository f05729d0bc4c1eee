//! Movie record caching.
//!
//! The cache is the only state shared between connection tasks, so the trait
//! takes `&self` and implementations synchronize internally.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::movies::MovieRecord;

/// Key → record store consulted before any external lookup.
///
/// Keys are normalized movie names (see [`crate::movies::cache_key`]).
/// Duplicate puts are last-write-wins. No TTL, no bound, no eviction: entries
/// live for the process.
pub trait MovieCache: Send + Sync {
    /// Returns the record stored under `key`, if any.
    fn get(&self, key: &str) -> Option<MovieRecord>;

    /// Stores `record` under `key`, replacing any previous entry.
    fn put(&self, key: &str, record: MovieRecord);
}

impl<C: MovieCache> MovieCache for Arc<C> {
    fn get(&self, key: &str) -> Option<MovieRecord> {
        (**self).get(key)
    }

    fn put(&self, key: &str, record: MovieRecord) {
        (**self).put(key, record)
    }
}

/// Unbounded in-memory cache over a read-write-locked map.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, MovieRecord>>,
}

impl InMemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MovieCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<MovieRecord> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, record: MovieRecord) {
        self.entries.write().unwrap().insert(key.to_owned(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> MovieRecord {
        let mut fields = serde_json::Map::new();
        fields.insert("Title".to_owned(), title.into());
        MovieRecord::from(fields)
    }

    #[test]
    fn miss_returns_none() {
        let cache = InMemoryCache::new();
        assert!(cache.get("inception").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn put_then_get() {
        let cache = InMemoryCache::new();
        cache.put("inception", record("Inception"));
        let hit = cache.get("inception").unwrap();
        assert_eq!(hit.field("Title"), "Inception");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn duplicate_put_is_last_write_wins() {
        let cache = InMemoryCache::new();
        cache.put("dune", record("Dune"));
        cache.put("dune", record("Dune: Part Two"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("dune").unwrap().field("Title"), "Dune: Part Two");
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(InMemoryCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.put(&format!("movie-{i}"), record(&format!("Movie {i}")));
                    cache.get(&format!("movie-{i}"))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
        assert_eq!(cache.len(), 8);
    }
}
