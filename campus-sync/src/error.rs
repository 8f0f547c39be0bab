//! Error types for the synchronizer.

use campus_store::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// The individually-atomic step a synchronizer invocation was executing.
///
/// Steps run strictly in the order listed for the operation; there is no
/// rollback of steps already applied when a later one fails, so the caller
/// needs to know how far the invocation got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStep {
    /// Full replace of the primary record's own reference set.
    ReplaceForward,
    /// Reverse-lookup removal of the primary id from every opposite-side
    /// record pointing at it.
    Retract,
    /// Set-union addition of the primary id to the named opposite-side
    /// records.
    Establish,
    /// Removal of the primary record itself.
    RemovePrimary,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReplaceForward => "replace-forward",
            Self::Retract => "retract",
            Self::Establish => "establish",
            Self::RemovePrimary => "remove-primary",
        })
    }
}

/// Errors that can occur while synchronizing references.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The store failed mid-sequence; steps before `step` are applied and
    /// stay applied.
    #[error("store failed during {step}: {source}")]
    Store {
        step: SyncStep,
        #[source]
        source: StoreError,
    },

    /// The primary record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl SyncError {
    pub(crate) fn at(step: SyncStep) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { step, source }
    }
}
