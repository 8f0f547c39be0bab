//! College region.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a college is located, as the catalog groups it for display.
///
/// The platform only distinguishes domestic institutions from everything
/// else; new colleges default to `India`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    India,
    Abroad,
}

impl Region {
    /// Returns the display label used by the catalog UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Abroad => "Abroad",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "India" | "india" => Ok(Self::India),
            "Abroad" | "abroad" => Ok(Self::Abroad),
            other => Err(Error::UnknownRegion(other.to_string())),
        }
    }
}
