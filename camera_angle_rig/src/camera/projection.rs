/// Projection families for technical orthographic views.

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Orthographic projection family selected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionType {
    /// Equal foreshortening on all three axes (35.264° elevation)
    #[default]
    Isometric,
    /// Two axes share foreshortening (15° elevation)
    Dimetric,
    /// All three axes differ (45° elevation, offset azimuth)
    Trimetric,
}

impl ProjectionType {
    /// All projection types, in host menu order.
    pub const ALL: [ProjectionType; 3] = [
        ProjectionType::Isometric,
        ProjectionType::Trimetric,
        ProjectionType::Dimetric,
    ];

    /// Stable identifier, used by hosts that persist the selection.
    pub fn identifier(&self) -> &'static str {
        match self {
            ProjectionType::Isometric => "ISOMETRIC",
            ProjectionType::Dimetric => "DIMETRIC",
            ProjectionType::Trimetric => "TRIMETRIC",
        }
    }

    /// Short menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectionType::Isometric => "Isometric",
            ProjectionType::Dimetric => "Dimetric",
            ProjectionType::Trimetric => "Trimetric",
        }
    }

    /// Tooltip text.
    pub fn description(&self) -> &'static str {
        match self {
            ProjectionType::Isometric => "Isometric projection (35.264°)",
            ProjectionType::Dimetric => "Dimetric projection (45°)",
            ProjectionType::Trimetric => "Trimetric projection (+20°)",
        }
    }
}

impl fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectionType::ALL
            .into_iter()
            .find(|p| p.identifier().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown projection type '{}'", s)))
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
