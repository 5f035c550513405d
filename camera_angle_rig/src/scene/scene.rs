/// Scene - explicit model of the host scene graph.
///
/// Uses SlotMaps for O(1) insert/remove with stable keys. Parent-inverse
/// matrices are stored per object and only change when explicitly set,
/// so moving a parent never rewrites its children.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use glam::{Mat4, Quat, Vec3};
use crate::error::{Error, Result};
use crate::rig_err;
use super::scene_object::{
    SceneObject, ObjectKey, CollectionKey, ObjectKind, CameraData, EmptyDisplay,
};
use super::transform::Transform;

/// A named group of objects (an object may belong to several).
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    objects: FxHashSet<ObjectKey>,
}

impl Collection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, object: ObjectKey) -> bool {
        self.objects.contains(&object)
    }

    pub fn objects(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Scene graph: objects, collections and the active object.
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
    collections: SlotMap<CollectionKey, Collection>,
    active_object: Option<ObjectKey>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    // ===== OBJECTS =====

    /// Add an object at the root of the hierarchy
    pub fn create_object(&mut self, name: &str, kind: ObjectKind, transform: Transform) -> ObjectKey {
        self.objects.insert(SceneObject::new(name, kind, transform))
    }

    /// Add a perspective camera with default lens settings
    pub fn create_camera(&mut self, name: &str, transform: Transform) -> ObjectKey {
        self.create_object(name, ObjectKind::Camera(CameraData::default()), transform)
    }

    /// Add an empty at a root-level position
    pub fn create_empty(&mut self, name: &str, position: Vec3, display: EmptyDisplay) -> ObjectKey {
        self.create_object(name, ObjectKind::Empty(display), Transform::from_translation(position))
    }

    /// Remove an object.
    ///
    /// Children are detached and keep their world transform.
    /// Returns false if the key is invalid.
    pub fn remove_object(&mut self, key: ObjectKey) -> bool {
        if !self.objects.contains_key(key) {
            return false;
        }

        let children: Vec<ObjectKey> = self.children(key).collect();
        for child in children {
            if let Ok(world) = self.world_matrix(child) {
                if let Some(obj) = self.objects.get_mut(child) {
                    obj.parent = None;
                    obj.parent_inverse = Mat4::IDENTITY;
                    obj.transform = Transform::from_matrix(&world);
                }
            }
        }

        for (_, collection) in self.collections.iter_mut() {
            collection.objects.remove(&key);
        }
        if self.active_object == Some(key) {
            self.active_object = None;
        }

        self.objects.remove(key);
        true
    }

    /// Get an object by key
    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by key
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Get an object, or an `InvalidObject` error for stale keys
    pub fn get(&self, key: ObjectKey) -> Result<&SceneObject> {
        self.objects.get(key)
            .ok_or_else(|| rig_err!("camera_angle::Scene",
                Error::InvalidObject(format!("object {:?} does not exist", key))))
    }

    /// Mutable variant of `get`
    pub fn get_mut(&mut self, key: ObjectKey) -> Result<&mut SceneObject> {
        self.objects.get_mut(key)
            .ok_or_else(|| rig_err!("camera_angle::Scene",
                Error::InvalidObject(format!("object {:?} does not exist", key))))
    }

    /// First object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ObjectKey> {
        self.objects.iter()
            .find(|(_, obj)| obj.name == name)
            .map(|(key, _)| key)
    }

    /// Iterate over all objects (key, object)
    pub fn objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Get the number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Direct children of an object
    pub fn children(&self, parent: ObjectKey) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects.iter()
            .filter(move |(_, obj)| obj.parent == Some(parent))
            .map(|(key, _)| key)
    }

    // ===== ACTIVE OBJECT =====

    /// Object the host considers active (the target of UI commands)
    pub fn active_object(&self) -> Option<ObjectKey> {
        self.active_object
    }

    /// Set or clear the active object
    pub fn set_active(&mut self, key: Option<ObjectKey>) -> Result<()> {
        if let Some(key) = key {
            self.get(key)?;
        }
        self.active_object = key;
        Ok(())
    }

    // ===== COLLECTIONS =====

    /// Create an empty collection
    pub fn create_collection(&mut self, name: &str) -> CollectionKey {
        self.collections.insert(Collection {
            name: name.to_string(),
            objects: FxHashSet::default(),
        })
    }

    /// Get a collection by key
    pub fn collection(&self, key: CollectionKey) -> Option<&Collection> {
        self.collections.get(key)
    }

    /// Link an object into a collection (no-op if already linked)
    pub fn link_to_collection(&mut self, collection: CollectionKey, object: ObjectKey) -> Result<()> {
        self.get(object)?;
        let collection = self.collections.get_mut(collection)
            .ok_or_else(|| rig_err!("camera_angle::Scene",
                Error::InvalidObject(format!("collection {:?} does not exist", collection))))?;
        collection.objects.insert(object);
        Ok(())
    }

    /// Unlink an object from a collection. Returns false if it was not linked.
    pub fn unlink_from_collection(&mut self, collection: CollectionKey, object: ObjectKey) -> bool {
        self.collections.get_mut(collection)
            .map(|c| c.objects.remove(&object))
            .unwrap_or(false)
    }

    /// Collections an object belongs to
    pub fn collections_of(&self, object: ObjectKey) -> Vec<CollectionKey> {
        self.collections.iter()
            .filter(|(_, c)| c.objects.contains(&object))
            .map(|(key, _)| key)
            .collect()
    }

    // ===== TRANSFORMS =====

    /// World matrix of an object: parent world * parent_inverse * local.
    pub fn world_matrix(&self, key: ObjectKey) -> Result<Mat4> {
        let mut matrix = self.get(key)?.transform.to_matrix();
        let mut current = key;

        // set_parent rejects cycles, so this walk terminates
        while let Some(obj) = self.objects.get(current) {
            match obj.parent {
                Some(parent) => {
                    let parent_obj = self.get(parent)?;
                    matrix = parent_obj.transform.to_matrix() * obj.parent_inverse * matrix;
                    current = parent;
                }
                None => break,
            }
        }

        Ok(matrix)
    }

    /// World-space translation of an object
    pub fn world_translation(&self, key: ObjectKey) -> Result<Vec3> {
        Ok(self.world_matrix(key)?.w_axis.truncate())
    }

    /// Frame the local transform is expressed in: parent world * parent_inverse
    fn parent_frame(&self, key: ObjectKey) -> Result<Mat4> {
        let obj = self.get(key)?;
        match obj.parent {
            Some(parent) => Ok(self.world_matrix(parent)? * obj.parent_inverse),
            None => Ok(Mat4::IDENTITY),
        }
    }

    /// Set the local transform so that the object ends up at `world`.
    pub fn set_world_matrix(&mut self, key: ObjectKey, world: Mat4) -> Result<()> {
        let local = self.parent_frame(key)?.inverse() * world;
        self.get_mut(key)?.transform = Transform::from_matrix(&local);
        Ok(())
    }

    /// Store an explicit parent-inverse matrix
    pub fn set_parent_inverse(&mut self, key: ObjectKey, parent_inverse: Mat4) -> Result<()> {
        self.get_mut(key)?.parent_inverse = parent_inverse;
        Ok(())
    }

    /// Place an anchor at a world position with identity local rotation.
    pub fn set_anchor_transform(&mut self, anchor: ObjectKey, position: Vec3) -> Result<()> {
        let local_translation = self.parent_frame(anchor)?.inverse().transform_point3(position);
        let obj = self.get_mut(anchor)?;
        obj.transform.rotation = Quat::IDENTITY;
        obj.transform.translation = local_translation;
        Ok(())
    }

    // ===== HIERARCHY =====

    /// Change the parent link only.
    ///
    /// The local transform and the stored parent-inverse are kept as they
    /// are, so the world transform generally changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObject` if a key is stale or the link would
    /// create a cycle.
    pub fn set_parent(&mut self, child: ObjectKey, parent: Option<ObjectKey>) -> Result<()> {
        self.get(child)?;
        if let Some(parent) = parent {
            self.get(parent)?;
            if self.is_ancestor_or_self(child, parent) {
                return Err(rig_err!("camera_angle::Scene", Error::InvalidObject(format!(
                    "parenting {:?} under {:?} would create a cycle", child, parent
                ))));
            }
        }
        self.get_mut(child)?.parent = parent;
        Ok(())
    }

    /// Parent `child` under `parent` and keep its world transform.
    ///
    /// The stored parent-inverse becomes the inverse of the parent's
    /// current world matrix.
    pub fn set_parent_keep_transform(&mut self, child: ObjectKey, parent: Option<ObjectKey>) -> Result<()> {
        let world = self.world_matrix(child)?;
        self.set_parent(child, parent)?;

        let parent_inverse = match parent {
            Some(parent) => self.world_matrix(parent)?.inverse(),
            None => Mat4::IDENTITY,
        };
        self.set_parent_inverse(child, parent_inverse)?;
        self.set_world_matrix(child, world)
    }

    /// True if `ancestor` is `key` or one of its parents
    fn is_ancestor_or_self(&self, ancestor: ObjectKey, key: ObjectKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.objects.get(k).and_then(|obj| obj.parent);
        }
        false
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
