//! # Control Point Modes
//!
//! Per-anchor policy deciding how the two handles of an anchor co-move.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tangent constraint applied at an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlPointMode {
    /// Handles move independently.
    #[default]
    Free,
    /// The opposite handle stays collinear but keeps its own distance.
    Aligned,
    /// The opposite handle is the reflection of the edited one.
    Mirrored,
}

impl ControlPointMode {
    /// Returns true when editing one handle moves the other.
    #[inline]
    pub fn is_constrained(self) -> bool {
        !matches!(self, ControlPointMode::Free)
    }
}

impl fmt::Display for ControlPointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlPointMode::Free => "free",
            ControlPointMode::Aligned => "aligned",
            ControlPointMode::Mirrored => "mirrored",
        };
        f.write_str(name)
    }
}
