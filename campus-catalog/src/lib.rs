//! Catalog service boundary for Campus.
//!
//! One [`CatalogService`] call per external request: the six mutating
//! operations (create/update/delete on either collection) plus resolved
//! reads. Each mutator validates, persists the primary record, then runs
//! exactly one synchronizer invocation; store-level failures are translated
//! into the [`CatalogError`] taxonomy so callers can tell "nothing changed"
//! from "saved, but the inverse side may be stale".
//!
//! Transport framing (HTTP, RPC) is deliberately absent; whatever carries
//! requests maps onto these methods.

mod error;
mod service;

pub use error::{CatalogError, CatalogResult, EntityKind};
pub use service::{CatalogService, CollegeDetail, CourseDetail};
