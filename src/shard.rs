use crate::chain::Chain;
use crate::stats::ShardStats;
use parking_lot::RwLock;
use std::hash::Hash;

/// A single shard: an owned entry chain protected by a read-write lock.
///
/// Every operation acquires this shard's lock and nothing else, so a
/// traversal-plus-mutation sequence is atomic with respect to all other
/// operations on the same shard.
pub(crate) struct Shard<K, V> {
    chain: RwLock<Chain<K, V>>,
    stats: ShardStats,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Chain::new()),
            stats: ShardStats::new(),
        }
    }

    /// Insert a key-value pair, overwriting the value in place if the key
    /// already exists. The chain never holds two entries for one key.
    pub fn insert(&self, key: K, value: V) {
        let mut chain = self.chain.write();
        if chain.upsert(key, value) {
            self.stats.record_write();
        }
    }

    /// Look up a key under the shard's read lock, cloning the value out.
    /// Concurrent readers on the same shard do not block each other.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let chain = self.chain.read();
        let result = chain.get(key).cloned();
        if result.is_some() {
            self.stats.record_read();
        }
        result
    }

    /// Check if a key exists without cloning the value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.chain.read().get(key).is_some()
    }

    /// Apply `f` to the value for `key` in place, under the write lock.
    /// Returns `true` if the key existed.
    pub fn update<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let mut chain = self.chain.write();
        match chain.get_mut(key) {
            Some(value) => {
                f(value);
                self.stats.record_write();
                true
            }
            None => false,
        }
    }

    /// Unlink the entry for `key`, if present. Removing an absent key is a
    /// no-op, not an error. Returns `true` if an entry was removed.
    pub fn remove(&self, key: &K) -> bool {
        let mut chain = self.chain.write();
        let removed = chain.remove(key).is_some();
        if removed {
            self.stats.record_remove();
        }
        removed
    }

    /// Drop every entry in this shard, resetting its chain to empty.
    pub fn clear(&self) {
        self.chain.write().clear();
        self.stats.record_clear();
    }

    /// Get the number of entries in this shard.
    pub fn len(&self) -> usize {
        self.chain.read().len()
    }

    /// Check if this shard is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.read().is_empty()
    }

    /// Get a snapshot of statistics for this shard.
    pub fn stats(&self) -> crate::stats::ShardOps {
        self.stats.snapshot()
    }
}

impl<K, V> Default for Shard<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
