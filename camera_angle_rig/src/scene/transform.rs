/// Local transform and transform lock flags for scene objects.

use bitflags::bitflags;
use glam::{Mat4, Quat, Vec3};

/// Translation / rotation / scale relative to the parent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Translation + rotation, unit scale
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self { translation, rotation, scale: Vec3::ONE }
    }

    /// Decompose an affine matrix (no shear) into TRS.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self { translation, rotation: rotation.normalize(), scale }
    }

    /// Compose into a matrix (T * R * S)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

bitflags! {
    /// Channels the host UI must not let the user edit directly.
    ///
    /// The rig drives these channels itself, so it locks them on the
    /// camera (all three) and on the anchor (rotation and scale).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TransformLocks: u8 {
        const LOCATION = 1 << 0;
        const ROTATION = 1 << 1;
        const SCALE    = 1 << 2;
        const ALL = Self::LOCATION.bits() | Self::ROTATION.bits() | Self::SCALE.bits();
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
