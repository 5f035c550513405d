/// RigCoordinator - keeps a camera parented under its target anchor.
///
/// The camera orbits an `Empty` anchor. Its state (NoAnchor / Anchored)
/// lives in the scene graph itself: a camera is anchored when its parent
/// is an empty. The coordinator holds configuration only.
///
/// After every update the camera's local translation equals its world
/// position and its parent-inverse cancels the anchor's world matrix.
/// Moving the anchor afterwards carries the camera along by the same delta
/// until the next update re-centres the orbit.

use glam::{Quat, Vec3};
use crate::camera::{AngleTable, CameraPlacer, CameraPose};
use crate::config::RigConfig;
use crate::error::{Error, Result};
use crate::scene::{
    CameraProjection, EmptyDisplay, EmptyDisplayType, ObjectKey, Scene, TransformLocks,
};
use crate::{rig_bail, rig_debug, rig_info, rig_trace};
use super::camera_properties::CameraAngleProperties;

/// Camera / anchor relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigState {
    /// Camera has no empty parent yet
    NoAnchor,
    /// Camera is parented under an empty anchor
    Anchored,
}

/// Creates anchors and applies computed poses to scene objects.
#[derive(Debug, Clone)]
pub struct RigCoordinator {
    placer: CameraPlacer,
    anchor_suffix: String,
    anchor_display_size: f32,
    initial_ortho_scale: f32,
}

impl RigCoordinator {
    /// Create a coordinator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the configuration is inconsistent.
    pub fn new(config: &RigConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            placer: CameraPlacer::new(AngleTable::from_config(config)?),
            anchor_suffix: config.anchor_suffix.clone(),
            anchor_display_size: config.anchor_display_size,
            initial_ortho_scale: config.initial_ortho_scale,
        })
    }

    /// Placer used for pose computation
    pub fn placer(&self) -> &CameraPlacer {
        &self.placer
    }

    /// Anchor of a camera, if it has one.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObject` for stale keys and `Error::NoSelection`
    /// if the object is not a camera.
    pub fn find_anchor(scene: &Scene, camera: ObjectKey) -> Result<Option<ObjectKey>> {
        Self::check_camera(scene, camera)?;
        let anchor = scene.get(camera)?
            .parent()
            .filter(|&parent| scene.object(parent).is_some_and(|obj| obj.is_empty()));
        Ok(anchor)
    }

    /// Current rig state of a camera
    pub fn rig_state(scene: &Scene, camera: ObjectKey) -> Result<RigState> {
        Ok(match Self::find_anchor(scene, camera)? {
            Some(_) => RigState::Anchored,
            None => RigState::NoAnchor,
        })
    }

    /// Return the camera's anchor, creating it on first use.
    ///
    /// The camera is switched to orthographic and its transform channels are
    /// locked. An existing empty parent is adopted (rotation zeroed, rotation
    /// and scale locked). Otherwise a new anchor is placed `distance` units
    /// in front of the camera, linked into the camera's collections, and the
    /// camera is reparented under it without moving.
    ///
    /// Calling this again on an anchored camera creates nothing and leaves the
    /// camera's world transform unchanged.
    pub fn ensure_anchor(&self, scene: &mut Scene, camera: ObjectKey, distance: f32) -> Result<ObjectKey> {
        Self::check_camera(scene, camera)?;

        {
            let obj = scene.get_mut(camera)?;
            if let Some(data) = obj.camera_data_mut() {
                data.projection = CameraProjection::Orthographic;
            }
            obj.set_locks(TransformLocks::ALL);
        }

        if let Some(anchor) = Self::find_anchor(scene, camera)? {
            let obj = scene.get_mut(anchor)?;
            obj.set_locks(obj.locks() | TransformLocks::ROTATION | TransformLocks::SCALE);
            obj.transform.rotation = Quat::IDENTITY;
            rig_trace!("camera_angle::RigCoordinator", "Adopted anchor '{}'", obj.name());
            return Ok(anchor);
        }

        if !(distance > 0.0) || !distance.is_finite() {
            rig_bail!("camera_angle::RigCoordinator", Error::InvalidParameter(format!(
                "distance must be positive, got {}", distance
            )));
        }

        if let Some(data) = scene.get_mut(camera)?.camera_data_mut() {
            data.ortho_scale = self.initial_ortho_scale;
        }

        let camera_world = scene.world_matrix(camera)?;
        let (_, camera_rotation, camera_translation) = camera_world.to_scale_rotation_translation();
        let facing = camera_rotation * Vec3::NEG_Z;
        let anchor_position = camera_translation + facing * distance;

        let camera_obj = scene.get(camera)?;
        let anchor_name = format!("{}{}", camera_obj.name(), self.anchor_suffix);
        let previous_parent = camera_obj.parent();

        let anchor = scene.create_empty(&anchor_name, anchor_position, EmptyDisplay {
            display_type: EmptyDisplayType::Arrows,
            size: self.anchor_display_size,
            show_name: true,
            show_in_front: true,
        });
        scene.get_mut(anchor)?.set_locks(TransformLocks::ROTATION | TransformLocks::SCALE);

        for collection in scene.collections_of(camera) {
            scene.link_to_collection(collection, anchor)?;
        }

        if let Some(parent) = previous_parent {
            scene.set_parent(anchor, Some(parent))?;
            let parent_inverse = scene.world_matrix(parent)?.inverse();
            scene.set_parent_inverse(anchor, parent_inverse)?;
        }

        scene.set_parent(camera, Some(anchor))?;
        let anchor_inverse = scene.world_matrix(anchor)?.inverse();
        scene.set_parent_inverse(camera, anchor_inverse)?;
        scene.set_world_matrix(camera, camera_world)?;

        rig_info!("camera_angle::RigCoordinator",
            "Created anchor '{}' at {:?}", anchor_name, anchor_position);

        Ok(anchor)
    }

    /// Recompute and apply the camera pose for the given properties.
    ///
    /// Creates the anchor if needed, re-zeroes its rotation, places the
    /// camera around the anchor's world position and aims it at the anchor.
    pub fn update(
        &self,
        scene: &mut Scene,
        camera: ObjectKey,
        properties: &CameraAngleProperties,
    ) -> Result<CameraPose> {
        let anchor = self.ensure_anchor(scene, camera, properties.distance())?;

        scene.get_mut(anchor)?.transform.rotation = Quat::IDENTITY;
        let anchor_position = scene.world_translation(anchor)?;

        let pose = self.placer.place_view(
            anchor_position,
            properties.projection(),
            properties.slot(),
            properties.distance(),
        )?;
        self.apply_pose(scene, camera, anchor, &pose)?;

        rig_debug!("camera_angle::RigCoordinator",
            "{} slot ({}, {}) distance {}: camera at {:?}",
            properties.projection(),
            properties.slot().horizontal(),
            properties.slot().vertical(),
            properties.distance(),
            pose.position);

        Ok(pose)
    }

    /// Write a pose onto a camera parented under `anchor`.
    ///
    /// The camera's parent-inverse is recomputed from the anchor's current
    /// world matrix. A pose without orientation keeps the camera's rotation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObject` if `anchor` is not the camera's parent.
    pub fn apply_pose(
        &self,
        scene: &mut Scene,
        camera: ObjectKey,
        anchor: ObjectKey,
        pose: &CameraPose,
    ) -> Result<()> {
        Self::check_camera(scene, camera)?;
        if scene.get(camera)?.parent() != Some(anchor) {
            rig_bail!("camera_angle::RigCoordinator", Error::InvalidObject(format!(
                "object {:?} is not the anchor of camera {:?}", anchor, camera
            )));
        }

        let anchor_world = scene.world_matrix(anchor)?;
        let obj = scene.get_mut(camera)?;
        obj.transform.translation = pose.position;
        obj.parent_inverse = anchor_world.inverse();
        if let Some(rotation) = pose.orientation {
            obj.transform.rotation = rotation;
        }
        Ok(())
    }

    fn check_camera(scene: &Scene, camera: ObjectKey) -> Result<()> {
        let obj = scene.get(camera)?;
        if !obj.is_camera() {
            return Err(Error::NoSelection(format!("'{}' is not a camera", obj.name())));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "rig_coordinator_tests.rs"]
mod tests;
