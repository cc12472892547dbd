//! Debug snapshots of table state
//!
//! Point-in-time view for inspection and logging only. Not a durable or
//! versioned format.

use std::fmt;

use serde::Serialize;

use crate::key::Key;
use crate::table::ChainTable;

/// Serializable view of a table's buckets, size, and key set
#[derive(Debug, Serialize)]
pub struct TableSnapshot {
    /// Fixed bucket count of the table
    pub bucket_count: usize,
    /// Number of stored entries
    pub len: usize,
    /// Keys in first-insertion order, rendered as strings
    pub keys: Vec<String>,
    /// Non-empty buckets and their chain contents
    pub buckets: Vec<BucketSnapshot>,
}

/// One non-empty bucket's chain, head first
#[derive(Debug, Serialize)]
pub struct BucketSnapshot {
    /// Bucket index within the table
    pub index: usize,
    /// Entries as (key, value) string pairs
    pub entries: Vec<EntrySnapshot>,
}

/// One chain entry rendered for display
#[derive(Debug, Serialize)]
pub struct EntrySnapshot {
    /// Display form of the key
    pub key: String,
    /// Debug form of the value
    pub value: String,
}

impl TableSnapshot {
    /// Render the snapshot as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<V: fmt::Debug> ChainTable<V> {
    /// Capture a debug snapshot of the current table state
    pub fn snapshot(&self) -> TableSnapshot {
        let buckets = self
            .non_empty_buckets()
            .map(|(index, chain)| BucketSnapshot {
                index,
                entries: chain
                    .iter()
                    .map(|(key, value)| EntrySnapshot {
                        key: key.to_string(),
                        value: format!("{:?}", value),
                    })
                    .collect(),
            })
            .collect();

        TableSnapshot {
            bucket_count: self.bucket_count(),
            len: self.len(),
            keys: self.key_set().iter().map(Key::to_string).collect(),
            buckets,
        }
    }
}
