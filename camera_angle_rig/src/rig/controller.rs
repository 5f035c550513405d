/// CameraAngleController - command layer the host UI talks to.
///
/// Each parameter setter validates its input, stores it in the active
/// camera's record and runs the shared recompute. Errors never escape:
/// they come back as a `Notice` for the host to display.
///
/// Scene writes made during a recompute trigger no callbacks, so a
/// setter can't re-enter itself through the coordinator.

use slotmap::SecondaryMap;
use crate::camera::{CameraPose, ProjectionType};
use crate::config::RigConfig;
use crate::error::{Error, Result};
use crate::scene::{ObjectKey, Scene};
use crate::{rig_error, rig_info, rig_warn};
use super::camera_properties::CameraAngleProperties;
use super::notice::Notice;
use super::rig_coordinator::{RigCoordinator, RigState};

const NO_CAMERA_MESSAGE: &str = "Select a camera first";
const TARGET_CREATED_MESSAGE: &str = "Camera target created";

/// A parameter edit coming from the host UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    Projection(ProjectionType),
    HorizontalSlot(i32),
    VerticalSlot(i32),
    Distance(f32),
}

/// What the host panel should show for the active object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelState {
    /// Active camera has no anchor: show the "Create" button
    NoTarget,
    /// Active camera is anchored: show the parameter controls
    Controls(CameraAngleProperties),
}

/// Owns per-camera properties and dispatches host commands.
pub struct CameraAngleController {
    config: RigConfig,
    coordinator: RigCoordinator,
    properties: SecondaryMap<ObjectKey, CameraAngleProperties>,
}

impl CameraAngleController {
    /// Create a controller.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the configuration is inconsistent.
    pub fn new(config: RigConfig) -> Result<Self> {
        let coordinator = RigCoordinator::new(&config)?;
        Ok(Self {
            config,
            coordinator,
            properties: SecondaryMap::new(),
        })
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn coordinator(&self) -> &RigCoordinator {
        &self.coordinator
    }

    // ===== PROPERTIES =====

    /// Properties of a camera (configured defaults if never edited)
    pub fn properties(&self, camera: ObjectKey) -> CameraAngleProperties {
        self.properties.get(camera)
            .copied()
            .unwrap_or_else(|| CameraAngleProperties::from_config(&self.config))
    }

    /// Restore a camera's properties (e.g. from host persistence) without recomputing
    pub fn set_properties(&mut self, camera: ObjectKey, properties: CameraAngleProperties) {
        self.properties.insert(camera, properties);
    }

    /// Drop the record of a deleted camera. Returns false if there was none.
    pub fn forget_camera(&mut self, camera: ObjectKey) -> bool {
        self.properties.remove(camera).is_some()
    }

    // ===== PARAMETER HANDLERS =====

    /// Projection type changed
    pub fn set_projection_type(&mut self, scene: &mut Scene, projection: ProjectionType) -> Option<Notice> {
        let result = self.edit_and_update(scene, |props, _| {
            props.set_projection(projection);
            Ok(())
        });
        Self::report(result)
    }

    /// Horizontal slot changed
    pub fn set_horizontal_slot(&mut self, scene: &mut Scene, horizontal: i32) -> Option<Notice> {
        let result = self.edit_and_update(scene, |props, _| props.set_horizontal_slot(horizontal));
        Self::report(result)
    }

    /// Vertical slot changed
    pub fn set_vertical_slot(&mut self, scene: &mut Scene, vertical: i32) -> Option<Notice> {
        let result = self.edit_and_update(scene, |props, _| props.set_vertical_slot(vertical));
        Self::report(result)
    }

    /// Distance changed
    pub fn set_distance(&mut self, scene: &mut Scene, distance: f32) -> Option<Notice> {
        let result = self.edit_and_update(scene, |props, config| props.set_distance(distance, config));
        Self::report(result)
    }

    /// Dispatch a parameter change event to its handler
    pub fn handle(&mut self, scene: &mut Scene, change: ParameterChange) -> Option<Notice> {
        match change {
            ParameterChange::Projection(projection) => self.set_projection_type(scene, projection),
            ParameterChange::HorizontalSlot(horizontal) => self.set_horizontal_slot(scene, horizontal),
            ParameterChange::VerticalSlot(vertical) => self.set_vertical_slot(scene, vertical),
            ParameterChange::Distance(distance) => self.set_distance(scene, distance),
        }
    }

    // ===== COMMANDS =====

    /// "Create target" command: anchor the active camera and place it.
    pub fn create_target(&mut self, scene: &mut Scene) -> Notice {
        match self.edit_and_update(scene, |_, _| Ok(())) {
            Ok(_) => {
                rig_info!("camera_angle::Controller", "{}", TARGET_CREATED_MESSAGE);
                Notice::info(TARGET_CREATED_MESSAGE)
            }
            Err(Error::NoSelection(_)) => {
                rig_warn!("camera_angle::Controller", "Create target: no camera selected");
                Notice::error(NO_CAMERA_MESSAGE)
            }
            Err(err) => {
                rig_error!("camera_angle::Controller", "Create target failed: {}", err);
                Notice::error(err.to_string())
            }
        }
    }

    /// Panel contents for the active object; `None` hides the panel.
    pub fn panel_state(&self, scene: &Scene) -> Option<PanelState> {
        let camera = Self::active_camera(scene).ok()?;
        match RigCoordinator::rig_state(scene, camera).ok()? {
            RigState::NoAnchor => Some(PanelState::NoTarget),
            RigState::Anchored => Some(PanelState::Controls(self.properties(camera))),
        }
    }

    // ===== INTERNALS =====

    fn active_camera(scene: &Scene) -> Result<ObjectKey> {
        scene.active_object()
            .filter(|&key| scene.object(key).is_some_and(|obj| obj.is_camera()))
            .ok_or_else(|| Error::NoSelection(NO_CAMERA_MESSAGE.to_string()))
    }

    /// Apply `edit` to the active camera's properties, store them, recompute.
    ///
    /// A rejected edit leaves the stored properties and the scene untouched.
    fn edit_and_update<F>(&mut self, scene: &mut Scene, edit: F) -> Result<CameraPose>
    where
        F: FnOnce(&mut CameraAngleProperties, &RigConfig) -> Result<()>,
    {
        let camera = Self::active_camera(scene)?;
        let mut properties = self.properties(camera);
        edit(&mut properties, &self.config)?;
        self.properties.insert(camera, properties);
        self.coordinator.update(scene, camera, &properties)
    }

    /// Convert a handler result into an optional notice (None on success)
    fn report(result: Result<CameraPose>) -> Option<Notice> {
        match result {
            Ok(_) => None,
            Err(Error::NoSelection(msg)) => {
                rig_warn!("camera_angle::Controller", "Parameter change ignored: {}", msg);
                Some(Notice::warning(msg))
            }
            Err(err) => {
                rig_error!("camera_angle::Controller", "Parameter change rejected: {}", err);
                Some(Notice::error(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
