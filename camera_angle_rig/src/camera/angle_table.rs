/// AngleTable - maps (projection, view slot) to orbit angles.
///
/// Horizontal slots step around the target in 45° increments. Trimetric
/// views add an alternating 15°/30° offset so adjacent slots show the
/// characteristic uneven axis foreshortening.
///
/// Vertical slots, top to bottom: zenith, projection elevation, horizon,
/// negative elevation, nadir. The zenith/nadir rows use a limit just short
/// of 90° so the look-at direction never becomes parallel to world up.

use crate::config::RigConfig;
use crate::error::{Error, Result};
use super::projection::ProjectionType;
use super::view_slot::ViewSlot;

/// Default zenith/nadir elevation in degrees
pub const DEFAULT_ZENITH_LIMIT_DEGREES: f32 = 89.95;

/// Horizontal step between adjacent slots, in degrees
const HORIZONTAL_STEP_DEGREES: f32 = 45.0;

/// Orbit angles derived from a view slot, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSpec {
    /// Azimuth around world +Z, measured from +X toward +Y
    pub horizontal: f32,
    /// Elevation above the XY plane
    pub vertical: f32,
}

impl AngleSpec {
    /// Build from angles in degrees.
    pub fn from_degrees(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.to_radians(),
            vertical: vertical.to_radians(),
        }
    }

    /// Azimuth in degrees
    pub fn horizontal_degrees(&self) -> f32 {
        self.horizontal.to_degrees()
    }

    /// Elevation in degrees
    pub fn vertical_degrees(&self) -> f32 {
        self.vertical.to_degrees()
    }
}

/// Lookup table for projection angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTable {
    zenith_limit_degrees: f32,
}

impl AngleTable {
    /// Create a table with a custom zenith limit.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the limit is not in (0, 90) degrees.
    pub fn new(zenith_limit_degrees: f32) -> Result<Self> {
        if !(zenith_limit_degrees > 0.0 && zenith_limit_degrees < 90.0) {
            return Err(Error::InvalidParameter(format!(
                "zenith limit must be in (0, 90) degrees, got {}",
                zenith_limit_degrees
            )));
        }
        Ok(Self { zenith_limit_degrees })
    }

    /// Create a table from the rig configuration.
    pub fn from_config(config: &RigConfig) -> Result<Self> {
        Self::new(config.zenith_limit_degrees)
    }

    /// Zenith/nadir elevation in degrees
    pub fn zenith_limit_degrees(&self) -> f32 {
        self.zenith_limit_degrees
    }

    /// Resolve raw slot indices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSlot` if horizontal ∉ [1, 8] or vertical ∉ [1, 5].
    pub fn resolve(
        &self,
        projection: ProjectionType,
        horizontal_slot: i32,
        vertical_slot: i32,
    ) -> Result<AngleSpec> {
        let slot = ViewSlot::new(horizontal_slot, vertical_slot)?;
        Ok(self.resolve_slot(projection, slot))
    }

    /// Resolve an already validated slot.
    pub fn resolve_slot(&self, projection: ProjectionType, slot: ViewSlot) -> AngleSpec {
        AngleSpec::from_degrees(
            Self::horizontal_degrees(projection, slot.horizontal()),
            self.vertical_degrees(projection, slot.vertical()),
        )
    }

    /// Vertical table row for a projection, top to bottom.
    pub fn vertical_row(&self, projection: ProjectionType) -> [f32; 5] {
        let elevation = Self::elevation_degrees(projection);
        let zenith = self.zenith_limit_degrees;
        [zenith, elevation, 0.0, -elevation, -zenith]
    }

    fn elevation_degrees(projection: ProjectionType) -> f32 {
        match projection {
            ProjectionType::Isometric => 35.264,
            ProjectionType::Dimetric => 15.0,
            ProjectionType::Trimetric => 45.0,
        }
    }

    fn horizontal_degrees(projection: ProjectionType, horizontal_slot: i32) -> f32 {
        let step = horizontal_slot - 1;
        let base = step as f32 * HORIZONTAL_STEP_DEGREES;
        match projection {
            ProjectionType::Isometric | ProjectionType::Dimetric => base,
            ProjectionType::Trimetric if step % 2 == 1 => base + 30.0,
            ProjectionType::Trimetric => base + 15.0,
        }
    }

    fn vertical_degrees(&self, projection: ProjectionType, vertical_slot: i32) -> f32 {
        // ViewSlot guarantees 1..=5
        self.vertical_row(projection)[(vertical_slot - 1) as usize]
    }
}

impl Default for AngleTable {
    fn default() -> Self {
        Self { zenith_limit_degrees: DEFAULT_ZENITH_LIMIT_DEGREES }
    }
}

#[cfg(test)]
#[path = "angle_table_tests.rs"]
mod tests;
