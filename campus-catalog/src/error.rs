//! Error taxonomy for the catalog boundary.

use campus_store::StoreError;
use campus_sync::SyncStep;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which collection an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    College,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::College => "college",
            Self::Course => "course",
        })
    }
}

/// Errors surfaced to catalog callers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required attribute is missing or malformed. Raised before any
    /// store write.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The primary record does not exist. Raised before any write.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// The primary write succeeded but a later inverse-side step failed.
    /// The saved record is correct; the opposite collection may be stale
    /// until a reconciliation pass runs. Not retried, not rolled back.
    #[error("{kind} {id} was saved, but reference sync failed during {step}: {source}")]
    PartialSync {
        kind: EntityKind,
        id: String,
        step: SyncStep,
        #[source]
        source: StoreError,
    },

    /// The store failed before any state changed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Whether the operation left the catalog in a possibly-inconsistent
    /// state that only a reconciliation pass can repair.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartialSync { .. })
    }
}
