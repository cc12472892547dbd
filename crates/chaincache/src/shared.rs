//! Shared cache handle with hit/miss accounting
//!
//! The plain [`LruCache`] is the primary single-threaded API; this wraps it
//! behind a lock for callers who want one cache shared across threads, in
//! the same shape as a statistics-tracking cache frontend.

use std::sync::Arc;

use parking_lot::RwLock;

use chaintable::{Key, Result};

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cloneable, thread-safe handle over an [`LruCache`]
///
/// Reads clone values out so no lock is held across caller code. Every `get`
/// records a hit or miss; every `put` records an insert, plus an eviction
/// when the capacity was reached.
pub struct SharedCache<V> {
    inner: Arc<RwLock<LruCache<V>>>,
    stats: Arc<CacheStats>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<V: Clone> SharedCache<V> {
    /// Create a new shared cache with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is 0, like [`LruCache::new`].
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Insert a key/value pair, returning the evicted entry if any
    pub fn put(&self, key: impl Into<Key>, value: V) -> Result<Option<(Key, V)>> {
        let evicted = self.inner.write().put(key, value)?;
        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        Ok(evicted)
    }

    /// Get a value, refreshing its recency and recording hit/miss
    pub fn get(&self, key: &Key) -> Result<Option<V>> {
        let mut cache = self.inner.write();
        match cache.get(key)? {
            Some(value) => {
                self.stats.record_hit();
                Ok(Some(value.clone()))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    /// Remove a key, returning true if it was present
    pub fn delete(&self, key: &Key) -> Result<bool> {
        self.inner.write().delete(key)
    }

    /// Check membership without touching recency or stats
    pub fn contains(&self, key: &Key) -> bool {
        self.inner.read().contains(key)
    }

    /// The most-recently-used key, cloned out of the lock
    pub fn most_recent_key(&self) -> Option<Key> {
        self.inner.read().most_recent_key().cloned()
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Clear the cache and reset statistics
    pub fn clear(&self) {
        self.inner.write().clear();
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_basic() {
        let cache = SharedCache::new(10);

        cache.put("k", 42).unwrap();
        assert_eq!(cache.get(&Key::from("k")).unwrap(), Some(42));
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.stats().misses(), 0);
    }

    #[test]
    fn test_shared_miss_recorded() {
        let cache: SharedCache<i32> = SharedCache::new(10);

        assert_eq!(cache.get(&Key::from("absent")).unwrap(), None);
        assert_eq!(cache.stats().misses(), 1);
    }

    #[test]
    fn test_shared_eviction_recorded() {
        let cache = SharedCache::new(2);

        cache.put(1, "a").unwrap();
        cache.put(2, "b").unwrap();
        let evicted = cache.put(3, "c").unwrap();

        assert_eq!(evicted, Some((Key::from(1), "a")));
        assert_eq!(cache.stats().inserts(), 3);
        assert_eq!(cache.stats().evictions(), 1);
    }

    #[test]
    fn test_shared_clones_see_same_cache() {
        let cache = SharedCache::new(4);
        let other = cache.clone();

        cache.put("k", 7).unwrap();
        assert_eq!(other.get(&Key::from("k")).unwrap(), Some(7));
        assert_eq!(cache.stats().hits(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = SharedCache::new(64);
        let mut handles = Vec::new();

        for t in 0..4i64 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..16i64 {
                    cache.put(t * 16 + i, i).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 64);
        assert_eq!(cache.stats().inserts(), 64);
    }

    #[test]
    fn test_shared_clear_resets_stats() {
        let cache = SharedCache::new(4);

        cache.put("a", 1).unwrap();
        cache.get(&Key::from("a")).unwrap();
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().hits(), 0);
        assert_eq!(cache.stats().inserts(), 0);
    }
}
