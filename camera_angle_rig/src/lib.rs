/*!
# Camera Angle Rig

Orbit-camera placement for isometric, dimetric and trimetric views.

A camera is parented under an empty "target" anchor and placed on a sphere
around it. Projection type and view slot pick the angles from a fixed table.
The distance sets the sphere radius, and the camera is aimed back at the anchor.

## Architecture

- **AngleTable**: (projection, horizontal slot, vertical slot) to angles
- **CameraPlacer**: angles + distance to camera position and orientation
- **RigCoordinator**: anchor creation/adoption and parent-inverse bookkeeping
- **CameraAngleController**: host-facing commands returning user notices
- **Scene**: explicit scene graph the rig reads and writes

Everything is host-agnostic: hosts mirror their objects into a `Scene`, run
commands through the controller and read the resulting transforms back.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod scene;
pub mod rig;

// Main camera_angle namespace module
pub mod camera_angle {
    // Error types
    pub use crate::error::{Error, Result};

    // Global services (logger)
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::RigConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Angle tables and placement
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene graph model
    pub mod scene {
        pub use crate::scene::*;
    }

    // Anchors and host commands
    pub mod rig {
        pub use crate::rig::*;
    }
}

// Re-export math library at crate root
pub use glam;
