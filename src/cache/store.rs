//! Bounded TTL cache for API responses
//!
//! Provides a `ResponseCache` that stores serializable data in memory with
//! expiry timestamps and LRU eviction once the configured capacity is
//! reached. The cache is process-lifetime scoped; nothing is persisted.

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};

/// Number of entries held before least-recently-used eviction kicks in
const DEFAULT_CAPACITY: usize = 1024;

/// Default time-to-live for cached responses (30 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(1800);

/// A single cached response
#[derive(Debug)]
struct CacheEntry {
    /// Serialized JSON payload
    data: String,
    /// When the entry was stored
    stored_at: Instant,
    /// How long the entry stays valid after `stored_at`
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}

/// Bounded in-memory cache mapping derived string keys to JSON payloads
///
/// Values are stored as serialized JSON and decoded on the way out, so each
/// call site reads back the type it cached. A payload that does not decode
/// as the requested type reads as a miss.
///
/// The cache is explicitly constructed and meant to be shared behind an
/// `Arc`, not reached through a process-wide global, so tests can run
/// against an isolated instance.
pub struct ResponseCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.len())
            .finish()
    }
}

impl ResponseCache {
    /// Creates a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` entries
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Stores a value under `key` with the given TTL
    ///
    /// Overwrites any existing entry for the key. May evict the
    /// least-recently-used entry if the cache is full.
    pub fn insert<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), serde_json::Error> {
        let data = serde_json::to_string(value)?;
        let entry = CacheEntry {
            data,
            stored_at: Instant::now(),
            ttl,
        };
        self.lock().put(key.to_string(), entry);
        Ok(())
    }

    /// Returns the cached value for `key` if present and unexpired
    ///
    /// An expired entry is removed as a side effect and reported as a miss.
    /// A hit refreshes the entry's recency for LRU purposes.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.lock();

        let is_expired = match entries.peek(key) {
            Some(entry) => entry.is_expired(),
            None => return None,
        };
        if is_expired {
            entries.pop(key);
            return None;
        }

        let entry = entries.get(key)?;
        serde_json::from_str(&entry.data).ok()
    }

    /// Removes the entry for `key`, returning whether it existed
    pub fn remove(&self, key: &str) -> bool {
        self.lock().pop(key).is_some()
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes all entries whose key contains `fragment`
    ///
    /// Linear scan over the key set. Returns the number of entries removed.
    pub fn remove_matching(&self, fragment: &str) -> usize {
        let mut entries = self.lock();
        let keys: Vec<String> = entries
            .iter()
            .filter(|(key, _)| key.contains(fragment))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &keys {
            entries.pop(key);
        }
        keys.len()
    }

    /// Number of entries currently stored, including any not yet expired-out
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::thread;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "sample".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_get_returns_value_immediately_after_insert() {
        let cache = ResponseCache::new();

        cache
            .insert("key", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");

        let result: Option<TestData> = cache.get("key");
        assert_eq!(result, Some(sample()));
    }

    #[test]
    fn test_get_returns_none_for_missing_key() {
        let cache = ResponseCache::new();

        let result: Option<TestData> = cache.get("nonexistent");
        assert!(result.is_none());
    }

    #[test]
    fn test_expired_entry_reads_as_miss_and_is_removed() {
        let cache = ResponseCache::new();

        cache
            .insert("short_lived", &sample(), Duration::from_millis(20))
            .expect("Insert should succeed");
        thread::sleep(Duration::from_millis(40));

        let result: Option<TestData> = cache.get("short_lived");
        assert!(result.is_none(), "Expired entry should read as a miss");
        assert_eq!(cache.len(), 0, "Expired entry should be evicted on lookup");
    }

    #[test]
    fn test_entry_is_fresh_before_ttl_elapses() {
        let cache = ResponseCache::new();

        cache
            .insert("fresh", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");
        thread::sleep(Duration::from_millis(10));

        let result: Option<TestData> = cache.get("fresh");
        assert!(result.is_some(), "Entry should stay valid until its TTL");
    }

    #[test]
    fn test_insert_overwrites_existing_entry() {
        let cache = ResponseCache::new();
        let first = TestData {
            name: "first".to_string(),
            value: 1,
        };
        let second = TestData {
            name: "second".to_string(),
            value: 2,
        };

        cache
            .insert("key", &first, Duration::from_secs(60))
            .expect("First insert should succeed");
        cache
            .insert("key", &second, Duration::from_secs(60))
            .expect("Second insert should succeed");

        let result: Option<TestData> = cache.get("key");
        assert_eq!(result, Some(second));
    }

    #[test]
    fn test_remove_deletes_entry() {
        let cache = ResponseCache::new();

        cache
            .insert("key", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");

        assert!(cache.remove("key"));
        assert!(!cache.remove("key"), "Second remove should report absence");

        let result: Option<TestData> = cache.get("key");
        assert!(result.is_none());
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = ResponseCache::new();

        cache
            .insert("a", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");
        cache
            .insert("b", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_matching_removes_only_matching_keys() {
        let cache = ResponseCache::new();
        let ttl = Duration::from_secs(60);

        cache.insert("wp_posts_{}", &1, ttl).expect("Insert");
        cache.insert("wp_posts_{\"page\":\"2\"}", &2, ttl).expect("Insert");
        cache.insert("wp_pages_{}", &3, ttl).expect("Insert");

        let removed = cache.remove_matching("wp_posts");
        assert_eq!(removed, 2);

        let posts: Option<i32> = cache.get("wp_posts_{}");
        assert!(posts.is_none(), "Matching key should be gone");
        let pages: Option<i32> = cache.get("wp_pages_{}");
        assert_eq!(pages, Some(3), "Unrelated key should be intact");
    }

    #[test]
    fn test_capacity_bound_evicts_least_recently_used() {
        let cache = ResponseCache::with_capacity(2);
        let ttl = Duration::from_secs(60);

        cache.insert("a", &1, ttl).expect("Insert");
        cache.insert("b", &2, ttl).expect("Insert");

        // Touch "a" so "b" becomes the eviction candidate
        let a: Option<i32> = cache.get("a");
        assert_eq!(a, Some(1));

        cache.insert("c", &3, ttl).expect("Insert");

        let b: Option<i32> = cache.get("b");
        assert!(b.is_none(), "LRU entry should have been evicted");
        let a: Option<i32> = cache.get("a");
        assert_eq!(a, Some(1));
        let c: Option<i32> = cache.get("c");
        assert_eq!(c, Some(3));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = ResponseCache::with_capacity(0);

        cache
            .insert("key", &sample(), Duration::from_secs(60))
            .expect("Insert should succeed");

        let result: Option<TestData> = cache.get("key");
        assert_eq!(result, Some(sample()));
    }

    #[test]
    fn test_type_mismatch_reads_as_miss() {
        let cache = ResponseCache::new();

        cache
            .insert("key", &"a string", Duration::from_secs(60))
            .expect("Insert should succeed");

        let result: Option<TestData> = cache.get("key");
        assert!(result.is_none(), "Undecodable payload should read as a miss");
    }
}
