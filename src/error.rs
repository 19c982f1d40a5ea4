//! Error types for `stepcount`.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a container. Operations on a built container never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A hash table needs at least one bucket.
    #[error("hash table needs at least one bucket")]
    ZeroBuckets,

    /// The name does not match any of `division`, `multiplication` or `folding`.
    #[error("unknown hash function: {0}")]
    UnknownHashFunction(String),
}
