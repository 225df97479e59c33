//! Reversible scene operations recorded in the board history
//!
//! Each operation holds the object handles it targets, in order, so that
//! re-insertion on undo/redo is deterministic.

mod add;
mod delete;
mod translate;

pub use add::AddObjects;
pub use delete::DeleteObjects;
pub use translate::MoveObjects;

use crate::history::Operation;
use crate::scene::{ObjectId, Scene};

/// Any operation the board controller records
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    Add(AddObjects),
    Delete(DeleteObjects),
    Move(MoveObjects),
}

impl SceneCommand {
    pub fn targets(&self) -> &[ObjectId] {
        match self {
            SceneCommand::Add(op) => op.targets(),
            SceneCommand::Delete(op) => op.targets(),
            SceneCommand::Move(op) => op.targets(),
        }
    }
}

impl Operation for SceneCommand {
    type Target = Scene;

    fn apply(&mut self, scene: &mut Scene) {
        match self {
            SceneCommand::Add(op) => op.apply(scene),
            SceneCommand::Delete(op) => op.apply(scene),
            SceneCommand::Move(op) => op.apply(scene),
        }
    }

    fn revert(&mut self, scene: &mut Scene) {
        match self {
            SceneCommand::Add(op) => op.revert(scene),
            SceneCommand::Delete(op) => op.revert(scene),
            SceneCommand::Move(op) => op.revert(scene),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SceneCommand::Add(op) => op.label(),
            SceneCommand::Delete(op) => op.label(),
            SceneCommand::Move(op) => op.label(),
        }
    }
}

impl From<AddObjects> for SceneCommand {
    fn from(op: AddObjects) -> Self {
        SceneCommand::Add(op)
    }
}

impl From<DeleteObjects> for SceneCommand {
    fn from(op: DeleteObjects) -> Self {
        SceneCommand::Delete(op)
    }
}

impl From<MoveObjects> for SceneCommand {
    fn from(op: MoveObjects) -> Self {
        SceneCommand::Move(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size, Vector};
    use crate::scene::{BlockKind, ContainerId};

    fn scene_with(labels: &[&str]) -> (Scene, Vec<ObjectId>) {
        let mut scene = Scene::new();
        let ids = labels
            .iter()
            .map(|label| {
                scene.create_object(
                    *label,
                    BlockKind::Paragraph,
                    Point::ORIGIN,
                    Size::new(10.0, 10.0),
                )
            })
            .collect();
        (scene, ids)
    }

    #[test]
    fn test_add_attaches_in_order_and_reverts() {
        let (mut scene, ids) = scene_with(&["a", "b", "c"]);
        let mut add = AddObjects::new(ContainerId::ROOT, ids.clone());

        add.apply(&mut scene);
        assert_eq!(scene.children(ContainerId::ROOT), ids.as_slice());

        add.revert(&mut scene);
        assert!(scene.children(ContainerId::ROOT).is_empty());
        assert!(ids.iter().all(|id| scene.object(*id).is_some()));
    }

    #[test]
    fn test_delete_restores_same_parent_and_order() {
        let (mut scene, ids) = scene_with(&["a", "b"]);
        let other = scene.add_container();
        for id in &ids {
            scene.attach(other, *id);
        }

        let mut delete = DeleteObjects::new(other, ids.clone());
        delete.apply(&mut scene);
        assert!(scene.children(other).is_empty());
        assert_eq!(scene.parent_of(ids[0]), None);

        delete.revert(&mut scene);
        assert_eq!(scene.children(other), ids.as_slice());
        assert_eq!(delete.parent(), other);
    }

    #[test]
    fn test_move_applies_delta_to_live_positions() {
        let (mut scene, ids) = scene_with(&["a", "b"]);
        scene.set_position(ids[0], Point::new(100.0, 50.0));
        scene.set_position(ids[1], Point::new(-20.0, 0.0));

        let mut op = MoveObjects::new(ids.clone(), Vector::new(5.0, -3.0));
        op.apply(&mut scene);
        assert_eq!(scene.position(ids[0]), Some(Point::new(105.0, 47.0)));
        assert_eq!(scene.position(ids[1]), Some(Point::new(-15.0, -3.0)));

        op.revert(&mut scene);
        assert_eq!(scene.position(ids[0]), Some(Point::new(100.0, 50.0)));
        assert_eq!(scene.position(ids[1]), Some(Point::new(-20.0, 0.0)));
    }

    #[test]
    fn test_scene_command_dispatch() {
        let (mut scene, ids) = scene_with(&["a"]);
        let mut command: SceneCommand = AddObjects::new(ContainerId::ROOT, ids.clone()).into();

        assert_eq!(command.label(), "add");
        assert_eq!(command.targets(), ids.as_slice());

        command.apply(&mut scene);
        assert!(scene.is_attached(ids[0]));
        command.revert(&mut scene);
        assert!(!scene.is_attached(ids[0]));
    }
}
