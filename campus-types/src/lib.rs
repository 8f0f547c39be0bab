//! Core type definitions for Campus.
//!
//! This crate defines the fundamental types shared by every layer of the
//! catalog core:
//! - College and Course identifiers (UUID v7)
//! - The `Region` a college belongs to
//!
//! Domain records (colleges, courses, classification) live in
//! `campus-model`, not here.

mod ids;
mod region;

pub use ids::{CollegeId, CourseId};
pub use region::Region;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown region: {0}")]
    UnknownRegion(String),
}
