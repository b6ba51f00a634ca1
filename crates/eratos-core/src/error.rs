//! Error types for the sieve engine.

/// Sieve errors.
///
/// Every variant is raised before the candidate table is allocated, so a
/// failed call never produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SieveError {
    /// Bound is negative or not an integer.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Bound is larger than the configured `max_bound` (or does not fit `usize`).
    #[error("bound {requested} exceeds limit {limit}")]
    BoundExceedsLimit { requested: u64, limit: u64 },
}

impl SieveError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether the caller supplied a malformed bound (as opposed to a well-formed
    /// bound that the configuration refuses).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type for sieve operations.
pub type SieveResult<T> = Result<T, SieveError>;
