//! Reference synchronizer for Campus.
//!
//! Colleges and courses each cache a denormalized set of opposite-side
//! identifiers (`College::courses_offered` / `Course::colleges`). This
//! crate owns the closure invariant between the two sets: a reference from
//! either side must be matched by the inverse reference on the other.
//!
//! - [`ReferenceSynchronizer`] applies the inverse-side updates for every
//!   create, update and delete of a primary record. The store offers no
//!   atomicity across the two collections, so each operation is a short
//!   sequence of individually-atomic steps with a hard ordering.
//! - [`reconcile`] is the out-of-band repair path: it detects closure
//!   violations left behind by partial failures or races and rewrites the
//!   inverse side from a chosen authoritative side.

pub mod reconcile;

mod error;
mod synchronizer;

pub use error::{SyncError, SyncResult, SyncStep};
pub use synchronizer::ReferenceSynchronizer;
