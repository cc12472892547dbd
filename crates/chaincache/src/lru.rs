//! LRU (Least Recently Used) cache implementation
//!
//! A single arena of nodes carries both representations of membership: the
//! backing [`ChainTable`] maps each key to its arena index, and the recency
//! list threads prev/next indices through the same arena. Explicit head and
//! tail pointers make move-to-front and eviction O(1).

use chaintable::{ChainTable, Key, Result};

/// Node in the LRU doubly-linked list
struct Node<V> {
    key: Key,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity
///
/// Head is the most-recently-used entry, tail the eviction candidate. Key
/// lookup goes through a [`ChainTable`] storing arena indices, so there is
/// exactly one record of each entry to keep consistent.
pub struct LruCache<V> {
    table: ChainTable<usize>,
    nodes: Vec<Option<Node<V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
}

impl<V> LruCache<V> {
    /// Create a new LRU cache with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is 0. A zero-capacity cache would evict every
    /// insert immediately, which is never what the caller wants.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            table: ChainTable::new(),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Get a value, refreshing its recency
    ///
    /// A hit relinks the entry at the head of the recency list. Fails only
    /// when the key cannot be normalized.
    pub fn get(&mut self, key: &Key) -> Result<Option<&V>> {
        let Some(idx) = self.table.get(key)?.copied() else {
            return Ok(None);
        };
        self.move_to_front(idx);
        Ok(self.nodes[idx].as_ref().map(|node| &node.value))
    }

    /// Get a value without refreshing its recency
    pub fn peek(&self, key: &Key) -> Result<Option<&V>> {
        let Some(idx) = self.table.get(key)?.copied() else {
            return Ok(None);
        };
        Ok(self.nodes[idx].as_ref().map(|node| &node.value))
    }

    /// Insert a key/value pair, returning the evicted entry if any
    ///
    /// An existing key is updated in place and moved to the head. A new key
    /// at capacity first evicts the tail from both the recency list and the
    /// backing table.
    pub fn put(&mut self, key: impl Into<Key>, value: V) -> Result<Option<(Key, V)>> {
        let key = key.into();

        if let Some(idx) = self.table.get(&key)?.copied() {
            if let Some(node) = self.nodes[idx].as_mut() {
                node.value = value;
            }
            self.move_to_front(idx);
            return Ok(None);
        }

        let evicted = if self.table.len() >= self.capacity {
            self.evict()?
        } else {
            None
        };

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = self.nodes[head_idx].as_mut() {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.table.put(key, idx)?;
        Ok(evicted)
    }

    /// Remove a key from the cache, returning true if it was present
    pub fn delete(&mut self, key: &Key) -> Result<bool> {
        let Some(idx) = self.table.get(key)?.copied() else {
            return Ok(false);
        };

        self.table.remove(key)?;
        self.unlink(idx);
        self.nodes[idx] = None;
        self.free_node(idx);
        Ok(true)
    }

    /// The most-recently-used key, if the cache is non-empty
    pub fn most_recent_key(&self) -> Option<&Key> {
        self.head
            .and_then(|idx| self.nodes[idx].as_ref())
            .map(|node| &node.key)
    }

    /// Check membership without touching recency
    pub fn contains(&self, key: &Key) -> bool {
        self.table.contains_key(key)
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);

        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = self.nodes[head_idx].as_mut() {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = self.nodes[prev_idx].as_mut() {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = self.nodes[next_idx].as_mut() {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    // Unlink before take: unlink reads the node's prev/next to repair the
    // list and the tail pointer.
    fn evict(&mut self) -> Result<Option<(Key, V)>> {
        let Some(tail_idx) = self.tail else {
            return Ok(None);
        };

        self.unlink(tail_idx);
        let Some(node) = self.nodes[tail_idx].take() else {
            return Ok(None);
        };
        self.free_node(tail_idx);
        self.table.remove(&node.key)?;
        Ok(Some((node.key, node.value)))
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}
