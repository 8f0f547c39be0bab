//! Catalog store seam for Campus.
//!
//! The store holds the two catalog collections and exposes the mutation
//! primitives the synchronizer is written against:
//!
//! - point and bulk lookups by identifier set
//! - full-replace writes of a record's attributes or its reference set
//! - bulk conditional updates (reverse-lookup pull, set-union push)
//!
//! Every primitive is atomic per matched document, and none spans both
//! collections. The sequence of primitives making up one catalog operation
//! is therefore interleavable and can fail part-way through; tolerating
//! that is the synchronizer's problem, not the store's.
//!
//! [`MemoryStore`] is the in-process backend. [`FaultStore`] wraps any
//! backend with a caller-installed hook for failure-injection and
//! interleaving tests.

mod error;
mod fault;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use fault::FaultStore;
pub use memory::MemoryStore;
pub use store::CatalogStore;
