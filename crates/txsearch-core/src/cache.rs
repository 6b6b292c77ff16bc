//! Query result cache
//!
//! Bounded LRU map from normalized query to its full match list. Each entry
//! expires `ttl` after insertion; an expired entry reads as a miss and is
//! dropped on the lookup that finds it. The empty query is never stored.

use crate::dataset::Matches;
use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use txsearch_config::CacheConfig;

struct CacheEntry {
    results: Matches,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.inserted_at) > ttl
    }
}

/// Cache counters for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
    pub expirations: u64,
}

struct Inner {
    entries: LruCache<String, CacheEntry>,
    stats: CacheStats,
}

pub struct QueryCache {
    inner: Mutex<Inner>,
    ttl: Duration,
}

impl QueryCache {
    /// Create a cache holding at most `max_entries` queries
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats {
                    capacity: capacity.get(),
                    ..CacheStats::default()
                },
            }),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl())
    }

    /// Look up a query. `Some` with an empty list is a valid hit.
    pub fn get(&self, key: &str) -> Option<Matches> {
        self.get_at(key, Instant::now())
    }

    /// Store the full match list of a query
    pub fn set(&self, key: String, results: Matches) {
        self.set_at(key, results, Instant::now())
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<Matches> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let expired = inner
            .entries
            .peek(key)
            .map(|entry| entry.is_expired(now, self.ttl))
            .unwrap_or(false);
        if expired {
            inner.entries.pop(key);
            inner.stats.expirations += 1;
        }

        match inner.entries.get(key) {
            Some(entry) => {
                inner.stats.hits += 1;
                Some(Arc::clone(&entry.results))
            }
            None => {
                inner.stats.misses += 1;
                None
            }
        }
    }

    fn set_at(&self, key: String, results: Matches, now: Instant) {
        if key.is_empty() {
            return;
        }

        let count = results.len();
        let mut inner = self.inner.lock();
        let displaced = inner.entries.push(
            key.clone(),
            CacheEntry {
                results,
                inserted_at: now,
            },
        );
        inner.stats.inserts += 1;

        if let Some((evicted, _)) = displaced {
            if evicted != key {
                inner.stats.evictions += 1;
                log::debug!("Evicted cached query '{}'", evicted);
            }
        }

        log::debug!(
            "Cached query result of keyword '{}' ({} matches, {} entries)",
            key,
            count,
            inner.entries.len()
        );
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            ..inner.stats.clone()
        }
    }
}
