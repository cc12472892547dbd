//! Bucket chain: singly-linked collision list
//!
//! Each bucket holds one chain; each node owns its successor. Lookups are
//! linear scans comparing the original key structurally, so keys whose
//! normalized forms collide remain independent entries.

use crate::key::Key;

/// Node in a bucket's collision chain
struct Node<V> {
    key: Key,
    value: V,
    next: Option<Box<Node<V>>>,
}

/// A single bucket's chain of entries
pub(crate) struct Chain<V> {
    head: Option<Box<Node<V>>>,
}

impl<V> Chain<V> {
    pub(crate) fn new() -> Self {
        Self { head: None }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Find the value stored under `key`, if any
    pub(crate) fn find(&self, key: &Key) -> Option<&V> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key == *key {
                return Some(&node.value);
            }
            cur = node.next.as_deref();
        }
        None
    }

    fn find_mut(&mut self, key: &Key) -> Option<&mut V> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == *key {
                return Some(&mut node.value);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    pub(crate) fn contains(&self, key: &Key) -> bool {
        self.find(key).is_some()
    }

    /// Insert or overwrite. Returns true if the key was new to this chain.
    pub(crate) fn insert(&mut self, key: Key, value: V) -> bool {
        if let Some(slot) = self.find_mut(&key) {
            *slot = value;
            return false;
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, value, next }));
        true
    }

    /// Unlink the node holding `key`, returning its value
    pub(crate) fn remove(&mut self, key: &Key) -> Option<V> {
        let mut cur = &mut self.head;
        while cur.as_ref().map_or(false, |node| node.key != *key) {
            cur = &mut cur.as_mut()?.next;
        }
        let node = cur.take()?;
        *cur = node.next;
        Some(node.value)
    }

    pub(crate) fn iter(&self) -> ChainIter<'_, V> {
        ChainIter {
            cur: self.head.as_deref(),
        }
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a chain's entries, head first
pub(crate) struct ChainIter<'a, V> {
    cur: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        Some((&node.key, &node.value))
    }
}
