//! Rig module
//!
//! Keeps cameras parented under their target anchors and exposes the
//! command layer a host UI drives: parameter edits, the "create target"
//! command and the panel state.

mod camera_properties;
mod controller;
mod notice;
mod rig_coordinator;

pub use camera_properties::CameraAngleProperties;
pub use controller::{CameraAngleController, ParameterChange, PanelState};
pub use notice::{Notice, NoticeSeverity};
pub use rig_coordinator::{RigCoordinator, RigState};
