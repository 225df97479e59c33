//! Scene graph: an arena of visual objects and ordered container child lists
//!
//! Objects are created detached and live in the arena for the lifetime of the
//! scene. Attaching follows `appendChild` semantics: an object attached
//! elsewhere is moved, and always lands at the end of the container's children.
//!
//! Attaching to a missing container, or touching a missing object, is an
//! external failure outside the history's error model. It is logged and
//! leaves the scene unchanged.

mod object;

use std::collections::HashMap;

pub use object::{BlockKind, ContainerId, ObjectId, SceneObject};

use crate::geometry::{Point, Size, Vector};

#[derive(Debug, Clone)]
pub struct Scene {
    objects: HashMap<ObjectId, SceneObject>,
    containers: HashMap<ContainerId, Vec<ObjectId>>,
    next_object_id: u64,
    next_container_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene with just the root container
    pub fn new() -> Self {
        let mut containers = HashMap::new();
        containers.insert(ContainerId::ROOT, Vec::new());

        Self {
            objects: HashMap::new(),
            containers,
            next_object_id: 1,
            next_container_id: ContainerId::ROOT.0 + 1,
        }
    }

    pub fn add_container(&mut self) -> ContainerId {
        let id = ContainerId(self.next_container_id);
        self.next_container_id += 1;
        self.containers.insert(id, Vec::new());
        id
    }

    /// Create a detached object
    pub fn create_object(
        &mut self,
        label: impl Into<String>,
        kind: BlockKind,
        position: Point,
        size: Size,
    ) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        self.objects.insert(
            id,
            SceneObject {
                id,
                label: label.into(),
                kind,
                position,
                size,
                parent: None,
            },
        );
        id
    }

    /// Append `id` to `parent`'s children, detaching it from any previous parent
    pub fn attach(&mut self, parent: ContainerId, id: ObjectId) {
        if !self.containers.contains_key(&parent) {
            tracing::warn!(target: "scene", ?parent, object = %id, "attach to missing container");
            return;
        }
        if !self.objects.contains_key(&id) {
            tracing::warn!(target: "scene", object = %id, "attach of unknown object");
            return;
        }

        self.detach(id);

        if let Some(children) = self.containers.get_mut(&parent) {
            children.push(id);
        }
        if let Some(object) = self.objects.get_mut(&id) {
            object.parent = Some(parent);
        }
    }

    /// Remove `id` from its parent. Detached objects stay in the arena.
    pub fn detach(&mut self, id: ObjectId) {
        let Some(object) = self.objects.get_mut(&id) else {
            tracing::warn!(target: "scene", object = %id, "detach of unknown object");
            return;
        };
        let Some(parent) = object.parent.take() else {
            return;
        };

        if let Some(children) = self.containers.get_mut(&parent) {
            children.retain(|child| *child != id);
        }
    }

    /// Attached children of `container`, bottom-most first
    pub fn children(&self, container: ContainerId) -> &[ObjectId] {
        self.containers
            .get(&container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn parent_of(&self, id: ObjectId) -> Option<ContainerId> {
        self.objects.get(&id).and_then(|object| object.parent)
    }

    pub fn is_attached(&self, id: ObjectId) -> bool {
        self.parent_of(id).is_some()
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// All objects in the arena, attached or not, ordered by id
    pub fn objects(&self) -> Vec<&SceneObject> {
        let mut objects: Vec<_> = self.objects.values().collect();
        objects.sort_by_key(|object| object.id);
        objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn attached_count(&self) -> usize {
        self.containers.values().map(Vec::len).sum()
    }

    pub fn position(&self, id: ObjectId) -> Option<Point> {
        self.objects.get(&id).map(|object| object.position)
    }

    pub fn set_position(&mut self, id: ObjectId, position: Point) {
        match self.objects.get_mut(&id) {
            Some(object) => object.position = position,
            None => tracing::warn!(target: "scene", object = %id, "set_position on unknown object"),
        }
    }

    /// Offset the live position of `id` by `delta`
    pub fn translate(&mut self, id: ObjectId, delta: Vector) {
        match self.objects.get_mut(&id) {
            Some(object) => object.position += delta,
            None => tracing::warn!(target: "scene", object = %id, "translate of unknown object"),
        }
    }

    /// Topmost attached child of `container` whose bounds contain `point`
    pub fn hit_test(&self, container: ContainerId, point: Point) -> Option<ObjectId> {
        self.children(container)
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.objects
                    .get(id)
                    .is_some_and(|object| object.bounds().contains(point))
            })
    }

    /// Lowest bottom edge among the attached children of `container`
    pub fn bottom(&self, container: ContainerId) -> Option<f64> {
        self.children(container)
            .iter()
            .filter_map(|id| self.objects.get(id))
            .map(|object| object.bounds().bottom())
            .reduce(f64::max)
    }
}
