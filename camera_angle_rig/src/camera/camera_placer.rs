/// CameraPlacer - spherical placement and look-at orientation.
///
/// World convention is Z-up: the azimuth turns around +Z starting at +X,
/// the elevation lifts off the XY plane. Cameras look down their local −Z
/// axis with local +Y as up.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
use crate::error::{Error, Result};
use super::angle_table::{AngleSpec, AngleTable};
use super::projection::ProjectionType;
use super::view_slot::ViewSlot;

/// World up reference used when aiming the camera
const WORLD_UP: Vec3 = Vec3::Z;

/// Below this squared length the projected up vector is treated as degenerate
const PARALLEL_EPSILON: f32 = 1e-12;

/// Computed camera pose in world space.
///
/// Recomputed from scratch on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera world position
    pub position: Vec3,
    /// Camera world orientation.
    ///
    /// `None` when the look direction has zero length; the caller keeps
    /// whatever orientation the camera already has.
    pub orientation: Option<Quat>,
}

impl CameraPose {
    /// Orientation as XYZ Euler angles in radians (X applied first, then Y, then Z).
    pub fn euler(&self) -> Option<Vec3> {
        self.orientation.map(quat_to_euler_xyz)
    }

    /// Direction the camera looks at (its local −Z axis in world space).
    pub fn forward(&self) -> Option<Vec3> {
        self.orientation.map(|q| q * Vec3::NEG_Z)
    }

    /// World matrix, using identity rotation when no orientation was derived.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation.unwrap_or(Quat::IDENTITY), self.position)
    }
}

/// Convert a quaternion to XYZ Euler angles (X applied first).
pub fn quat_to_euler_xyz(rotation: Quat) -> Vec3 {
    // R = Rz * Ry * Rx, which glam names ZYX
    let (z, y, x) = rotation.to_euler(EulerRot::ZYX);
    Vec3::new(x, y, z)
}

/// Convert XYZ Euler angles (X applied first) back to a quaternion.
pub fn euler_xyz_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, euler.z, euler.y, euler.x)
}

/// Rotation that points local −Z along `direction` with local +Y as up.
///
/// The up axis is the world +Z axis projected onto the plane perpendicular
/// to `direction`; world +Y takes over when the two are parallel.
/// Returns `None` for a zero-length or non-finite direction.
pub fn track_to(direction: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let back = -forward;

    let mut up = WORLD_UP - back * WORLD_UP.dot(back);
    if up.length_squared() < PARALLEL_EPSILON {
        up = Vec3::Y - back * Vec3::Y.dot(back);
    }
    let up = up.normalize();
    let right = up.cross(back);

    Some(Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize())
}

/// Places cameras on a sphere around an anchor point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraPlacer {
    angle_table: AngleTable,
}

impl CameraPlacer {
    /// Create a placer using the given angle table.
    pub fn new(angle_table: AngleTable) -> Self {
        Self { angle_table }
    }

    /// Angle table used by `place_slot`
    pub fn angle_table(&self) -> &AngleTable {
        &self.angle_table
    }

    /// Offset from the anchor for the given angles and distance.
    pub fn spherical_offset(angles: AngleSpec, distance: f32) -> Vec3 {
        let (sin_h, cos_h) = angles.horizontal.sin_cos();
        let (sin_v, cos_v) = angles.vertical.sin_cos();
        Vec3::new(
            distance * cos_v * cos_h,
            distance * cos_v * sin_h,
            distance * sin_v,
        )
    }

    /// Compute the camera pose orbiting `anchor_position`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `distance` is not a positive finite number.
    pub fn place(&self, anchor_position: Vec3, angles: AngleSpec, distance: f32) -> Result<CameraPose> {
        if !(distance > 0.0) || !distance.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "distance must be positive, got {}",
                distance
            )));
        }

        let position = anchor_position + Self::spherical_offset(angles, distance);
        let orientation = track_to(anchor_position - position);

        Ok(CameraPose { position, orientation })
    }

    /// Resolve the slot angles, then place the camera.
    ///
    /// # Errors
    ///
    /// Propagates `Error::InvalidSlot` from the angle table and
    /// `Error::InvalidParameter` from `place`.
    pub fn place_slot(
        &self,
        anchor_position: Vec3,
        projection: ProjectionType,
        horizontal_slot: i32,
        vertical_slot: i32,
        distance: f32,
    ) -> Result<CameraPose> {
        let angles = self.angle_table.resolve(projection, horizontal_slot, vertical_slot)?;
        self.place(anchor_position, angles, distance)
    }

    /// Same as `place_slot` for an already validated slot.
    pub fn place_view(
        &self,
        anchor_position: Vec3,
        projection: ProjectionType,
        slot: ViewSlot,
        distance: f32,
    ) -> Result<CameraPose> {
        let angles = self.angle_table.resolve_slot(projection, slot);
        self.place(anchor_position, angles, distance)
    }
}

#[cfg(test)]
#[path = "camera_placer_tests.rs"]
mod tests;
