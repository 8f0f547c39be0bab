//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert collided with an existing document id.
    #[error("duplicate id: {0}")]
    Duplicate(String),

    /// The store could not service the call (backend down, injected fault,
    /// poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}
