//! # StripeMap
//!
//! A fixed-shard concurrent map with striped locking.
//!
//! StripeMap routes every key to exactly one of a fixed set of shards by
//! hashing it modulo the shard count. Each shard owns a singly linked chain
//! of entries guarded by its own reader/writer lock, so operations on keys
//! in different shards never contend, writers on the same shard serialize,
//! and readers on the same shard run side by side.
//!
//! The shard table is sized once at construction (1031 shards by default, a
//! prime so modulo routing spreads hashes evenly) and never resized. That is
//! a deliberate capacity ceiling: chains grow under sustained load instead
//! of the table rehashing, which keeps routing stable and avoids any
//! cross-shard coordination.
//!
//! ## Features
//!
//! - **Striped Locking**: One reader/writer lock per shard, never two at once
//! - **Thread-Safe**: All operations are safe for concurrent access
//! - **Upsert Semantics**: Inserting an existing key overwrites in place
//! - **Deterministic**: Same key always maps to the same shard
//! - **Configurable**: Choose shard count and hash function
//! - **Introspectable**: Per-shard occupancy and operation tracking
//!
//! ## Example
//!
//! ```rust
//! use stripemap::StripeMap;
//!
//! let map = StripeMap::new();
//!
//! // Insert values (upsert: duplicates overwrite in place)
//! map.insert("key1", 1);
//! map.insert("key2", 2);
//!
//! // Read values
//! assert_eq!(map.get(&"key1"), Some(1));
//! assert_eq!(map.get(&"missing"), None);
//!
//! // Update values in place
//! map.update(&"key1", |v| *v += 10);
//!
//! // Remove (absent keys are a no-op)
//! map.remove(&"key2");
//!
//! // Clear everything, shard by shard
//! map.clear();
//! assert!(map.is_empty());
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use stripemap::{StripeMapBuilder, HashFunction};
//!
//! let map = StripeMapBuilder::new()
//!     .shard_count(257)?  // any count > 0; primes distribute best
//!     .hash_function(HashFunction::AHash)
//!     .build::<String, i32>()?;
//! # Ok::<(), stripemap::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Per-shard linked entry storage.
pub mod chain;
/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash function implementations.
pub mod hash;
/// Internal shard implementation.
pub mod shard;
/// Statistics and diagnostics collection.
pub mod stats;
/// Main StripeMap implementation.
pub mod stripemap;

// Re-export main types
pub use config::{Config, HashFunction, StripeMapBuilder, DEFAULT_SHARD_COUNT};
pub use error::Error;
pub use stats::{Diagnostics, ShardDiagnostics, ShardOps, Stats};
pub use stripemap::StripeMap;
