//! Camera module - projection angles and camera placement.
//!
//! Pure geometry: nothing here touches the scene graph. The rig module
//! feeds anchor positions in and applies the resulting poses.

mod angle_table;
mod camera_placer;
mod projection;
mod view_slot;

pub use angle_table::{AngleSpec, AngleTable, DEFAULT_ZENITH_LIMIT_DEGREES};
pub use camera_placer::{
    CameraPlacer, CameraPose,
    track_to, quat_to_euler_xyz, euler_xyz_to_quat,
};
pub use projection::ProjectionType;
pub use view_slot::{ViewSlot, HORIZONTAL_SLOTS, VERTICAL_SLOTS};
