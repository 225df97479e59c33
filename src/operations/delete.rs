use crate::history::Operation;
use crate::scene::{ContainerId, ObjectId, Scene};

/// Detach objects from a container; the inverse of [`AddObjects`](super::AddObjects)
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteObjects {
    parent: ContainerId,
    targets: Vec<ObjectId>,
}

impl DeleteObjects {
    pub fn new(parent: ContainerId, targets: Vec<ObjectId>) -> Self {
        Self { parent, targets }
    }

    pub fn parent(&self) -> ContainerId {
        self.parent
    }

    pub fn targets(&self) -> &[ObjectId] {
        &self.targets
    }
}

impl Operation for DeleteObjects {
    type Target = Scene;

    fn apply(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.detach(id);
        }
    }

    /// Re-attaches to the original parent, in the original order
    fn revert(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.attach(self.parent, id);
        }
    }

    fn label(&self) -> &'static str {
        "delete"
    }
}
