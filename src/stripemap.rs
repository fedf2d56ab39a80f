use crate::config::{create_hasher, Config};
use crate::error::Error;
use crate::hash::ShardHasher;
use crate::shard::Shard;
use crate::stats::{Diagnostics, ShardDiagnostics, ShardOps, Stats};
use std::hash::Hash;

/// Fixed-shard concurrent map with striped locking.
///
/// Every key is routed to exactly one of a fixed set of shards by
/// `hash(key) % shard_count`. Each shard owns a singly linked chain of
/// entries guarded by its own reader/writer lock, so operations on keys in
/// different shards never contend. The shard table is sized once at
/// construction (1031 shards by default) and never resized, and no entry is
/// ever rehashed into a different shard.
///
/// The map does not implement `Clone`; share it between threads behind an
/// `Arc` instead of passing it around by value.
///
/// # Example
///
/// ```rust
/// use stripemap::StripeMap;
///
/// let map = StripeMap::new();
/// map.insert("key1", 1);
///
/// assert_eq!(map.get(&"key1"), Some(1));
/// ```
pub struct StripeMap<K, V> {
    shards: Box<[Shard<K, V>]>,
    hash: ShardHasher,
}

impl<K, V> StripeMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    /// Create a new map with defaults (1031 shards, ahash).
    pub fn new() -> Self {
        Self::with_config(Config::default()).unwrap()
    }

    /// Create a new map with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if config.shard_count == 0 {
            return Err(Error::InvalidShardCount);
        }

        let mut shards = Vec::with_capacity(config.shard_count);
        for _ in 0..config.shard_count {
            shards.push(Shard::new());
        }

        Ok(Self {
            shards: shards.into_boxed_slice(),
            hash: create_hasher(config.hash_function),
        })
    }

    /// Figure out which shard this key belongs to.
    #[inline]
    fn shard_index(&self, key: &K) -> usize {
        self.hash.shard_for(key, self.shards.len())
    }

    /// Insert a key-value pair. If the key already exists its value is
    /// overwritten in place (no duplicate entry is ever created).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripemap::StripeMap;
    ///
    /// let map = StripeMap::new();
    /// map.insert("key", 1);
    /// map.insert("key", 2);
    /// assert_eq!(map.get(&"key"), Some(2));
    /// ```
    pub fn insert(&self, key: K, value: V) {
        let shard_idx = self.shard_index(&key);
        self.shards[shard_idx].insert(key, value);
    }

    /// Get a copy of the value for `key`, or `None` if the key is absent.
    ///
    /// Lookups take the owning shard's read lock, so any number of readers
    /// can search the same shard at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripemap::StripeMap;
    ///
    /// let map = StripeMap::new();
    /// map.insert("key", 7);
    ///
    /// assert_eq!(map.get(&"key"), Some(7));
    /// assert_eq!(map.get(&"missing"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let shard_idx = self.shard_index(key);
        self.shards[shard_idx].get(key)
    }

    /// Check whether `key` is present without cloning its value.
    pub fn contains_key(&self, key: &K) -> bool {
        let shard_idx = self.shard_index(key);
        self.shards[shard_idx].contains_key(key)
    }

    /// Update the value for `key` in place using a closure. Returns `true`
    /// if the key existed. The closure runs under the shard's write lock.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripemap::StripeMap;
    ///
    /// let map = StripeMap::new();
    /// map.insert("counter", 0);
    ///
    /// map.update(&"counter", |v| *v += 1);
    /// assert_eq!(map.get(&"counter"), Some(1));
    /// ```
    pub fn update<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let shard_idx = self.shard_index(key);
        self.shards[shard_idx].update(key, f)
    }

    /// Remove the entry for `key`. Removing an absent key is a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripemap::StripeMap;
    ///
    /// let map = StripeMap::new();
    /// map.insert("key", 1);
    /// map.remove(&"key");
    ///
    /// assert_eq!(map.get(&"key"), None);
    /// map.remove(&"key"); // absent, nothing happens
    /// ```
    pub fn remove(&self, key: &K) {
        let shard_idx = self.shard_index(key);
        self.shards[shard_idx].remove(key);
    }

    /// Remove every entry from the map.
    ///
    /// Shards are cleared one at a time, each under its own write lock.
    /// There is no cross-shard snapshot: an insert racing with `clear` lands
    /// or disappears depending on whether its shard has been cleared yet.
    /// Each shard's clear is still atomic with respect to that shard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripemap::StripeMap;
    ///
    /// let map = StripeMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.clear();
        }
    }

    /// Get the total number of entries across all shards.
    ///
    /// Note: this takes each shard's read lock in turn, so the result is not
    /// a consistent snapshot under concurrent writes.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.len()).sum()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.is_empty())
    }

    /// The fixed number of shards chosen at construction.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of entries in each shard, in shard order.
    pub fn shard_loads(&self) -> Vec<usize> {
        self.shards.iter().map(|shard| shard.len()).collect()
    }

    /// Get detailed statistics about the map and its shards.
    pub fn stats(&self) -> Stats {
        let shard_sizes: Vec<usize> = self.shards.iter().map(|s| s.len()).collect();
        let operations: Vec<ShardOps> = self.shards.iter().map(|s| s.stats()).collect();
        let size: usize = shard_sizes.iter().sum();

        Stats {
            size,
            shard_sizes,
            operations,
        }
    }

    /// Structured snapshot for load introspection: per-shard occupancy and
    /// operation counts, plus aggregate load-balance ratios.
    pub fn diagnostics(&self) -> Diagnostics {
        let shards: Vec<ShardDiagnostics> = self
            .shards
            .iter()
            .map(|s| {
                let ops = s.stats();
                ShardDiagnostics {
                    entries: s.len(),
                    reads: ops.reads,
                    writes: ops.writes,
                    removes: ops.removes,
                    clears: ops.clears,
                }
            })
            .collect();

        let total_entries: usize = shards.iter().map(|s| s.entries).sum();
        let total_operations: u64 = shards
            .iter()
            .map(|s| s.reads + s.writes + s.removes + s.clears)
            .sum();
        let avg_load_per_shard = total_entries as f64 / self.shards.len() as f64;
        let max_load = shards.iter().map(|s| s.entries).max().unwrap_or(0);
        let max_load_ratio = if avg_load_per_shard > 0.0 {
            max_load as f64 / avg_load_per_shard
        } else {
            0.0
        };

        Diagnostics {
            total_entries,
            shards,
            total_operations,
            avg_load_per_shard,
            max_load_ratio,
        }
    }
}

impl<K, V> Default for StripeMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
