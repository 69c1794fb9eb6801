//! In-memory TTL store for decoded endpoint responses
//!
//! Provides an `EndpointCache` keyed by endpoint identifier. Entries carry a
//! monotonic fetch timestamp and are considered fresh while their age is
//! below the store's TTL. There is no background eviction and no size bound:
//! one entry per distinct endpoint ever fetched, overwritten in place.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde_json::Value;

/// A stored response plus its fetch timestamp
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The decoded response body
    data: Value,
    /// When the response was fetched
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Result of inspecting a cache entry, including metadata about freshness
///
/// The data is cloned out of the store; callers never hold a reference into
/// the cache.
#[derive(Debug, Clone)]
pub struct CachedValue {
    /// The cached response body
    pub data: Value,
    /// How long ago the response was fetched
    pub age: Duration,
    /// Whether the entry is still within the TTL
    pub is_fresh: bool,
}

/// In-memory cache mapping endpoint identifiers to decoded responses
///
/// Thread-safe; the lock is never held across an await point by callers in
/// this crate, so concurrent fetches for the same key simply race to
/// overwrite the entry (last writer wins, on equivalent data).
#[derive(Debug)]
pub struct EndpointCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl EndpointCache {
    /// Creates an empty cache whose entries stay fresh for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the configured TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a clone of the stored value for `key` if it is still fresh
    ///
    /// Stale and missing entries both yield `None`; staleness is evaluated
    /// here, at read time.
    pub fn get_fresh(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.is_fresh(self.ttl) {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// Stores `data` under `key` with the current time, overwriting any
    /// prior entry
    pub fn insert(&self, key: &str, data: Value) {
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                data,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Inspects the entry for `key` regardless of freshness
    ///
    /// Useful for callers that want last-known-good data after a failed
    /// refresh; the fetch path itself never serves stale entries.
    pub fn peek(&self, key: &str) -> Option<CachedValue> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        Some(CachedValue {
            data: entry.data.clone(),
            age: entry.fetched_at.elapsed(),
            is_fresh: entry.is_fresh(self.ttl),
        })
    }

    /// Returns the number of stored entries, fresh or stale
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
