//! Government/Private classification of colleges.
//!
//! The platform badges every college as Government or Private based on
//! institution-name markers. The heuristic is computed once when a college
//! is created or renamed and stored on the record; consumers read the
//! stored value instead of re-deriving it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Institution-name markers that identify a government college.
/// Matching is case-sensitive: the markers are acronyms.
const GOVERNMENT_MARKERS: &[&str] = &["IIT", "IIM", "AIIMS", "NIT", "IIIT", "Central University"];

/// Whether a college is government-run or private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Government,
    Private,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Government => "Government",
            Self::Private => "Private",
        })
    }
}

/// Classifies a college by name.
///
/// Pure and deterministic; no I/O. A name containing any government marker
/// classifies as [`Classification::Government`], everything else as
/// [`Classification::Private`].
#[must_use]
pub fn classify(name: &str) -> Classification {
    if GOVERNMENT_MARKERS.iter().any(|marker| name.contains(marker)) {
        Classification::Government
    } else {
        Classification::Private
    }
}
