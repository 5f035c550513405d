/// Per-camera angle parameters edited by the host UI.

use crate::camera::{ProjectionType, ViewSlot};
use crate::config::RigConfig;
use crate::error::{Error, Result};

/// Projection, view slot and orbit distance of one camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAngleProperties {
    projection: ProjectionType,
    slot: ViewSlot,
    distance: f32,
}

impl CameraAngleProperties {
    /// Create a record.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `distance` is not positive and finite.
    pub fn new(projection: ProjectionType, slot: ViewSlot, distance: f32) -> Result<Self> {
        Ok(Self {
            projection,
            slot,
            distance: check_distance(distance)?,
        })
    }

    /// Defaults for a camera that has never been edited.
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            projection: config.default_projection,
            slot: config.default_slot,
            distance: config.default_distance,
        }
    }

    pub fn projection(&self) -> ProjectionType {
        self.projection
    }

    pub fn slot(&self) -> ViewSlot {
        self.slot
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_projection(&mut self, projection: ProjectionType) {
        self.projection = projection;
    }

    pub fn set_horizontal_slot(&mut self, horizontal: i32) -> Result<()> {
        self.slot = self.slot.with_horizontal(horizontal)?;
        Ok(())
    }

    pub fn set_vertical_slot(&mut self, vertical: i32) -> Result<()> {
        self.slot = self.slot.with_vertical(vertical)?;
        Ok(())
    }

    /// Set the orbit distance, clamped into the configured range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for non-positive or non-finite values;
    /// the stored distance is left unchanged.
    pub fn set_distance(&mut self, distance: f32, config: &RigConfig) -> Result<()> {
        let distance = check_distance(distance)?;
        self.distance = distance.clamp(config.min_distance, config.max_distance);
        Ok(())
    }
}

fn check_distance(distance: f32) -> Result<f32> {
    if !(distance > 0.0) || !distance.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "distance must be positive, got {}",
            distance
        )));
    }
    Ok(distance)
}

#[cfg(test)]
#[path = "camera_properties_tests.rs"]
mod tests;
