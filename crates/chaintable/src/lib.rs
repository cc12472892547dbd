//! # chaintable
//!
//! Open-hashing hash table with separate chaining and dynamic key
//! normalization.
//!
//! ## Architecture
//! - **Key**: tagged union resolved once at the API boundary; normalization
//!   maps any key shape to an integer hash input
//! - **Chain**: singly-linked collision list per bucket, owned head to tail
//! - **ChainTable**: fixed bucket count (default 128, never rehashed),
//!   bucket index from a CRC32 checksum of the normalized key
//!
//! The table is a plain mutable structure: no locking inside, thread-safety
//! is the caller's concern.

#![warn(missing_docs)]

mod chain;
mod error;
mod key;
mod snapshot;
mod table;

pub use error::{Error, Result};
pub use key::Key;
pub use snapshot::{BucketSnapshot, EntrySnapshot, TableSnapshot};
pub use table::{ChainTable, DEFAULT_BUCKET_COUNT};
