//! Visual markers the controller keeps in sync with selection and gestures
//!
//! This is the headless equivalent of toggling CSS classes: which objects
//! show as selected, which are being dragged, and the ghost copies that
//! follow the pointer during a drag. It is only ever updated from the
//! selection and gesture callbacks wired up in [`BoardModel::new`].
//!
//! [`BoardModel::new`]: crate::model::BoardModel::new

use std::collections::BTreeSet;

use crate::geometry::Vector;
use crate::scene::ObjectId;

/// A translucent copy of a selected object shown while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ghost {
    pub source: ObjectId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualState {
    /// Objects showing the "selected" marker
    pub selected: BTreeSet<ObjectId>,
    /// Originals dimmed while their ghosts are dragged
    pub moving: BTreeSet<ObjectId>,
    pub ghosts: Vec<Ghost>,
    /// Translation applied to every ghost
    pub ghost_offset: Vector,
}

impl VisualState {
    pub fn mark_selected(&mut self, id: ObjectId) {
        self.selected.insert(id);
    }

    pub fn unmark_selected(&mut self, id: ObjectId) {
        self.selected.remove(&id);
        self.ghosts.retain(|ghost| ghost.source != id);
    }

    pub fn unmark_all(&mut self, ids: &[ObjectId]) {
        for id in ids {
            self.selected.remove(id);
        }
        self.ghosts.clear();
    }

    /// One ghost per selected object; originals get the moving marker
    pub fn begin_drag(&mut self, offset: Vector) {
        self.ghosts = self
            .selected
            .iter()
            .map(|&source| Ghost { source })
            .collect();
        self.moving = self.selected.clone();
        self.ghost_offset = offset;
    }

    pub fn end_drag(&mut self) {
        self.ghosts.clear();
        self.moving.clear();
        self.ghost_offset = Vector::ZERO;
    }

    pub fn is_dragging(&self) -> bool {
        !self.ghosts.is_empty()
    }
}
