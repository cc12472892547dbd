//! Chained hash table
//!
//! Fixed bucket count for the table's lifetime (no rehashing): the bucket
//! index is `crc32(normalized key) % bucket_count`, so adversarial keys can
//! degrade a chain to O(n). A universal hash family would fix that but is
//! deliberately out of scope here.

use std::collections::HashSet;

use ahash::RandomState;

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::key::Key;

/// Default number of buckets
pub const DEFAULT_BUCKET_COUNT: usize = 128;

/// Open-hashing map from dynamically-typed keys to values
pub struct ChainTable<V> {
    buckets: Vec<Chain<V>>,
    len: usize,

    /// Keys in first-insertion order; mirrors the chains exactly
    key_order: Vec<Key>,

    /// Fast membership mirror of `key_order`
    key_set: HashSet<Key, RandomState>,
}

impl<V> ChainTable<V> {
    /// Create a table with the default bucket count (128)
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with a fixed number of buckets
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "Bucket count must be greater than 0");

        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Chain::default);

        Self {
            buckets,
            len: 0,
            key_order: Vec::new(),
            key_set: HashSet::with_hasher(RandomState::new()),
        }
    }

    fn bucket_index(&self, key: &Key) -> Result<usize> {
        let normalized = key.normalize()?;
        let checksum = crc32fast::hash(normalized.to_string().as_bytes());
        Ok(checksum as usize % self.buckets.len())
    }

    /// Insert or overwrite a key/value pair
    ///
    /// Returns true if the key was new. Fails only when the key cannot be
    /// normalized; absence and overwrite are never errors.
    pub fn put(&mut self, key: impl Into<Key>, value: V) -> Result<bool> {
        let key = key.into();
        let idx = self.bucket_index(&key)?;

        let inserted = self.buckets[idx].insert(key.clone(), value);
        if inserted {
            self.len += 1;
            self.key_order.push(key.clone());
            self.key_set.insert(key);
        }
        Ok(inserted)
    }

    /// Get the value stored under `key`, if any
    pub fn get(&self, key: &Key) -> Result<Option<&V>> {
        let idx = self.bucket_index(key)?;
        Ok(self.buckets[idx].find(key))
    }

    /// Remove a key, returning true if it was present
    pub fn remove(&mut self, key: &Key) -> Result<bool> {
        let idx = self.bucket_index(key)?;

        if self.buckets[idx].remove(key).is_none() {
            return Ok(false);
        }

        self.len -= 1;
        self.key_set.remove(key);
        self.key_order.retain(|k| k != key);
        Ok(true)
    }

    /// Check membership without touching the chains
    pub fn contains_key(&self, key: &Key) -> bool {
        self.key_set.contains(key)
    }

    /// Full scan across every chain for a matching value
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (fixed at construction)
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Keys in first-insertion order
    ///
    /// A removed key is dropped from the sequence; re-adding it appends it
    /// at the end, as a fresh insertion.
    pub fn key_set(&self) -> &[Key] {
        &self.key_order
    }

    /// Entries of one bucket's chain, for debug introspection
    pub fn bucket_entries(&self, index: usize) -> Result<Vec<(&Key, &V)>> {
        let chain = self
            .buckets
            .get(index)
            .ok_or(Error::IndexOutOfBounds(index))?;
        Ok(chain.iter().collect())
    }

    /// Iterate over all entries, bucket by bucket (not insertion order)
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    /// Remove every entry, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = Chain::new();
        }
        self.len = 0;
        self.key_order.clear();
        self.key_set.clear();
    }

    pub(crate) fn non_empty_buckets(&self) -> impl Iterator<Item = (usize, &Chain<V>)> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty())
    }
}

impl<V> Default for ChainTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
