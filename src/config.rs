use crate::error::Error;
use crate::hash::ShardHasher;

/// Default number of shards. Prime, so modulo routing spreads hashes evenly
/// even for key sets with regular structure.
pub const DEFAULT_SHARD_COUNT: usize = 1031;

/// Which hash function to use for shard routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFunction {
    /// Use ahash (default, fast and well-distributed).
    #[default]
    AHash,
    /// Use fxhash (faster on small keys but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

/// Configuration for a StripeMap instance.
///
/// The shard count and hash function are resolved at construction time and
/// fixed for the map's entire lifetime.
#[derive(Debug)]
pub struct Config {
    pub(crate) shard_count: usize,
    pub(crate) hash_function: HashFunction,
}

impl Config {
    /// Create a new config with defaults (1031 shards, ahash).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of shards. Must be greater than 0; a prime count
    /// gives the most even key distribution.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidShardCount);
        }
        self.shard_count = count;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            hash_function: HashFunction::AHash,
        }
    }
}

/// Builder for creating a StripeMap with custom configuration.
pub struct StripeMapBuilder {
    config: Config,
}

impl StripeMapBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of shards. Must be greater than 0.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.shard_count(count)?;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Build a StripeMap with the configured settings.
    pub fn build<K, V>(self) -> Result<crate::StripeMap<K, V>, Error>
    where
        K: std::hash::Hash + Eq + Send + Sync,
        V: Send + Sync,
    {
        crate::StripeMap::with_config(self.config)
    }
}

impl Default for StripeMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a hash function instance based on the configuration.
pub(crate) fn create_hasher(hash_fn: HashFunction) -> ShardHasher {
    match hash_fn {
        HashFunction::AHash => ShardHasher::AHash,
        #[cfg(feature = "fxhash")]
        HashFunction::FxHash => ShardHasher::FxHash,
    }
}
