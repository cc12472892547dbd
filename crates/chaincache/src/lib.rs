//! # chaincache
//!
//! LRU cache layer built on the chaintable hash table.
//!
//! ## Architecture
//! - **ChainTable**: key lookup through the chained hash table (O(1) average)
//! - **Recency list**: doubly-linked list threaded through one node arena,
//!   with head and tail pointers for O(1) refresh and eviction
//! - **SharedCache**: optional locked handle with hit/miss statistics
//!
//! Keys are `chaintable::Key` values, so anything the table accepts can be
//! cached, including keys whose normalized forms collide.

#![warn(missing_docs)]

mod lru;
mod shared;
mod stats;

pub use chaintable::{Error, Key, Result};
pub use lru::LruCache;
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
