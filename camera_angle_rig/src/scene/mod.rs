//! Scene module
//!
//! Explicit model of the host scene graph: objects with local transforms,
//! parent links with stored parent-inverse matrices, collections, and the
//! active object. Hosts mirror their own objects into a Scene and read the
//! resulting transforms back after running rig commands.

mod scene;
mod scene_object;
mod transform;

pub use scene::{Scene, Collection};
pub use scene_object::{
    SceneObject, ObjectKey, CollectionKey, ObjectKind,
    CameraData, CameraProjection, EmptyDisplay, EmptyDisplayType,
};
pub use transform::{Transform, TransformLocks};
