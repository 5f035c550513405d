/// Scene object types.
///
/// A SceneObject mirrors the slice of host object state the rig needs:
/// its kind, its parent link, its local transform and the stored
/// parent-inverse matrix captured when it was parented.

use glam::Mat4;
use slotmap::new_key_type;
use super::transform::{Transform, TransformLocks};

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable key for an object within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    pub struct ObjectKey;

    /// Stable key for a collection within a Scene.
    pub struct CollectionKey;
}

// ===== OBJECT KINDS =====

/// Camera lens projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraProjection {
    #[default]
    Perspective,
    Orthographic,
}

/// Camera-specific object data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    pub projection: CameraProjection,
    /// Width of the orthographic view volume, in world units
    pub ortho_scale: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            projection: CameraProjection::Perspective,
            ortho_scale: 6.0,
        }
    }
}

/// How an empty is drawn in the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyDisplayType {
    #[default]
    PlainAxes,
    Arrows,
    Cube,
    Sphere,
}

/// Display settings of an empty object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyDisplay {
    pub display_type: EmptyDisplayType,
    pub size: f32,
    pub show_name: bool,
    pub show_in_front: bool,
}

impl Default for EmptyDisplay {
    fn default() -> Self {
        Self {
            display_type: EmptyDisplayType::PlainAxes,
            size: 1.0,
            show_name: false,
            show_in_front: false,
        }
    }
}

/// Kind of scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Camera(CameraData),
    /// Transform-only object; the only kind that can serve as a camera anchor
    Empty(EmptyDisplay),
    Mesh,
}

// ===== SCENE OBJECT =====

/// A node of the scene graph.
///
/// World matrix = parent world * parent_inverse * local (see `Scene::world_matrix`).
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub(crate) name: String,
    pub(crate) kind: ObjectKind,
    pub(crate) parent: Option<ObjectKey>,
    pub(crate) transform: Transform,
    pub(crate) parent_inverse: Mat4,
    pub(crate) locks: TransformLocks,
}

impl SceneObject {
    pub(crate) fn new(name: &str, kind: ObjectKind, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            kind,
            parent: None,
            transform,
            parent_inverse: Mat4::IDENTITY,
            locks: TransformLocks::empty(),
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<ObjectKey> {
        self.parent
    }

    /// Local transform (relative to parent * parent_inverse)
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn parent_inverse(&self) -> &Mat4 {
        &self.parent_inverse
    }

    pub fn locks(&self) -> TransformLocks {
        self.locks
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, ObjectKind::Camera(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, ObjectKind::Empty(_))
    }

    pub fn camera_data(&self) -> Option<&CameraData> {
        match &self.kind {
            ObjectKind::Camera(data) => Some(data),
            _ => None,
        }
    }

    pub fn empty_display(&self) -> Option<&EmptyDisplay> {
        match &self.kind {
            ObjectKind::Empty(display) => Some(display),
            _ => None,
        }
    }

    // ===== SETTERS =====

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_locks(&mut self, locks: TransformLocks) {
        self.locks = locks;
    }

    pub fn camera_data_mut(&mut self) -> Option<&mut CameraData> {
        match &mut self.kind {
            ObjectKind::Camera(data) => Some(data),
            _ => None,
        }
    }
}
