use std::hash::{Hash, Hasher};

/// Hash policy for shard routing, resolved at construction time.
/// Uses an enum to avoid trait object limitations with generics.
pub enum ShardHasher {
    /// AHash implementation (default, fast and well-distributed).
    AHash,
    /// FxHash implementation (faster on small keys, weaker distribution).
    #[cfg(feature = "fxhash")]
    FxHash,
}

impl ShardHasher {
    /// Hash a key down to 64 bits.
    pub fn hash_key<K: Hash>(&self, key: &K) -> u64 {
        match self {
            ShardHasher::AHash => {
                let mut hasher = ahash::AHasher::default();
                key.hash(&mut hasher);
                hasher.finish()
            }
            #[cfg(feature = "fxhash")]
            ShardHasher::FxHash => {
                let mut hasher = fxhash::FxHasher::default();
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }

    /// Route a key to a shard index in `[0, shard_count)`.
    ///
    /// Plain modulo rather than bit-masking: shard counts are not required
    /// to be powers of two, and the prime default relies on `%` routing.
    #[inline]
    pub fn shard_for<K: Hash>(&self, key: &K, shard_count: usize) -> usize {
        (self.hash_key(key) % shard_count as u64) as usize
    }
}

impl Default for ShardHasher {
    fn default() -> Self {
        ShardHasher::AHash
    }
}
