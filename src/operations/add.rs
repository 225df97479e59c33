use crate::history::Operation;
use crate::scene::{ContainerId, ObjectId, Scene};

/// Attach objects to a container, in order
#[derive(Debug, Clone, PartialEq)]
pub struct AddObjects {
    parent: ContainerId,
    targets: Vec<ObjectId>,
}

impl AddObjects {
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

impl Operation for AddObjects {
    type Target = Scene;

    fn apply(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.attach(self.parent, id);
        }
    }

    fn revert(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.detach(id);
        }
    }

    fn label(&self) -> &'static str {
        "add"
    }
}
