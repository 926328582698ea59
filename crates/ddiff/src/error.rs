//! Error types for the diff crate.

use ddiff_types::Path;

/// Errors that can occur during a bounded diff.
///
/// The unbounded entry points never fail; only [`crate::try_diff`] with a
/// configured depth limit can produce an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The traversal went deeper than [`crate::Options::max_depth`].
    #[error("depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { limit: usize, path: Path },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
