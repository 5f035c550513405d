/// Rig configuration - tunable constants shared by the angle table,
/// the property setters and the anchor creation policy.

use crate::camera::{ProjectionType, ViewSlot};
use crate::error::{Error, Result};

/// Camera angle rig configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RigConfig {
    /// Elevation used for the top/bottom vertical slots, in degrees.
    ///
    /// Kept just below 90 so the look-at never lines up with the world up axis.
    pub zenith_limit_degrees: f32,
    /// Smallest distance accepted by the property setters
    pub min_distance: f32,
    /// Largest distance accepted by the property setters
    pub max_distance: f32,
    /// Distance assigned to cameras that have never been edited
    pub default_distance: f32,
    /// Projection assigned to cameras that have never been edited
    pub default_projection: ProjectionType,
    /// View slot assigned to cameras that have never been edited
    pub default_slot: ViewSlot,
    /// Appended to the camera name when an anchor is created
    pub anchor_suffix: String,
    /// Display size of newly created anchors
    pub anchor_display_size: f32,
    /// Orthographic scale applied to a camera when its anchor is created
    pub initial_ortho_scale: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            zenith_limit_degrees: 89.95,
            min_distance: 0.1,
            max_distance: 5.0,
            default_distance: 1.0,
            default_projection: ProjectionType::Isometric,
            default_slot: ViewSlot::DEFAULT,
            anchor_suffix: "_Target".to_string(),
            anchor_display_size: 0.1,
            initial_ortho_scale: 1.0,
        }
    }
}

impl RigConfig {
    /// Check that the configuration is self-consistent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if:
    /// - the zenith limit is not in (0, 90)
    /// - the distance range is empty, non-positive, or excludes the default
    /// - the display size or ortho scale is not positive
    pub fn validate(&self) -> Result<()> {
        if !(self.zenith_limit_degrees > 0.0 && self.zenith_limit_degrees < 90.0) {
            return Err(Error::InvalidParameter(format!(
                "zenith limit must be in (0, 90) degrees, got {}",
                self.zenith_limit_degrees
            )));
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(Error::InvalidParameter(format!(
                "distance range [{}, {}] is invalid",
                self.min_distance, self.max_distance
            )));
        }
        if !(self.min_distance..=self.max_distance).contains(&self.default_distance) {
            return Err(Error::InvalidParameter(format!(
                "default distance {} outside [{}, {}]",
                self.default_distance, self.min_distance, self.max_distance
            )));
        }
        if !(self.anchor_display_size > 0.0) || !(self.initial_ortho_scale > 0.0) {
            return Err(Error::InvalidParameter(
                "anchor display size and ortho scale must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
