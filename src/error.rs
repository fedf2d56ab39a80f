/// Errors that can occur when constructing a StripeMap.
///
/// A missing key is never an error: lookups return `Option` and removing an
/// absent key is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shard count is invalid (must be greater than 0).
    InvalidShardCount,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidShardCount => write!(f, "shard count must be greater than 0"),
        }
    }
}

impl std::error::Error for Error {}
