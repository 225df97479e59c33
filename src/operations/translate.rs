use crate::geometry::Vector;
use crate::history::Operation;
use crate::scene::{ObjectId, Scene};

/// Offset objects by a fixed delta.
///
/// Only the delta is recorded. Reverting subtracts it from whatever position
/// each object has at that time, so nothing else may move these objects
/// between `apply` and `revert`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveObjects {
    targets: Vec<ObjectId>,
    delta: Vector,
}

impl MoveObjects {
    pub fn new(targets: Vec<ObjectId>, delta: Vector) -> Self {
        Self { targets, delta }
    }

    pub fn targets(&self) -> &[ObjectId] {
        &self.targets
    }

    pub fn delta(&self) -> Vector {
        self.delta
    }
}

impl Operation for MoveObjects {
    type Target = Scene;

    fn apply(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.translate(id, self.delta);
        }
    }

    fn revert(&mut self, scene: &mut Scene) {
        for &id in &self.targets {
            scene.translate(id, -self.delta);
        }
    }

    fn label(&self) -> &'static str {
        "move"
    }
}
