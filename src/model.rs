//! Board model: the state one `update()` call operates on
//!
//! Owns the scene, the selection, the gesture tracker and the history, and
//! wires the selection/gesture callbacks that keep [`VisualState`] in sync.

use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::config::BoardConfig;
use crate::geometry::{Point, Vector};
use crate::gesture::GestureTracker;
use crate::history::History;
use crate::operations::SceneCommand;
use crate::scene::{ContainerId, ObjectId, Scene};
use crate::selection::SelectionSet;
use crate::visual::VisualState;

pub struct BoardModel {
    pub scene: Scene,
    /// Container that pointer input and inserts operate on
    pub root: ContainerId,
    pub selection: SelectionSet<ObjectId>,
    pub gesture: GestureTracker,
    pub history: History<SceneCommand>,
    pub config: BoardConfig,
    visuals: Rc<RefCell<VisualState>>,
    pointer_held: bool,
}

impl std::fmt::Debug for BoardModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardModel")
            .field("scene", &self.scene)
            .field("selection", &self.selection)
            .field("gesture", &self.gesture)
            .field("history", &self.history)
            .field("visuals", &self.visuals)
            .finish_non_exhaustive()
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardModel {
    pub fn new(config: BoardConfig) -> Self {
        let visuals = Rc::new(RefCell::new(VisualState::default()));

        let mut selection = SelectionSet::new();
        {
            let visuals = Rc::clone(&visuals);
            selection
                .on_select()
                .add(move |id: &ObjectId| visuals.borrow_mut().mark_selected(*id));
        }
        {
            let visuals = Rc::clone(&visuals);
            selection
                .on_unselect()
                .add(move |id: &ObjectId| visuals.borrow_mut().unmark_selected(*id));
        }
        {
            let visuals = Rc::clone(&visuals);
            selection
                .on_clear()
                .add(move |ids: &[ObjectId]| visuals.borrow_mut().unmark_all(ids));
        }

        let mut gesture = GestureTracker::with_threshold(config.drag_threshold);
        {
            let visuals = Rc::clone(&visuals);
            gesture
                .on_start_move()
                .add(move |delta: &Vector| visuals.borrow_mut().begin_drag(*delta));
        }
        {
            let visuals = Rc::clone(&visuals);
            gesture
                .on_stop_move()
                .add(move |_: &Vector| visuals.borrow_mut().end_drag());
        }

        let history = match config.history_limit {
            Some(limit) => History::with_max_depth(limit),
            None => History::new(),
        };

        Self {
            scene: Scene::new(),
            root: ContainerId::ROOT,
            selection,
            gesture,
            history,
            config,
            visuals,
            pointer_held: false,
        }
    }

    /// Current visual markers
    pub fn visuals(&self) -> Ref<'_, VisualState> {
        self.visuals.borrow()
    }

    pub(crate) fn set_ghost_offset(&mut self, offset: Vector) {
        self.visuals.borrow_mut().ghost_offset = offset;
    }

    /// Whether a primary-button gesture is in progress
    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    pub(crate) fn set_pointer_held(&mut self, held: bool) {
        self.pointer_held = held;
    }

    /// Attached objects of the root container, bottom-most first
    pub fn attached(&self) -> &[ObjectId] {
        self.scene.children(self.root)
    }

    /// Topmost attached object under `point`
    pub fn hit_test(&self, point: Point) -> Option<ObjectId> {
        self.scene.hit_test(self.root, point)
    }

    /// Where the next inserted block goes: below the current content
    pub fn next_insert_origin(&self) -> Point {
        let origin = self.config.insert_origin;
        match self.scene.bottom(self.root) {
            Some(bottom) => Point::new(origin.x, bottom + self.config.block_spacing),
            None => origin,
        }
    }

    /// Selected objects still attached to the root, in selection order
    pub fn selected_attached(&self) -> Vec<ObjectId> {
        self.selection
            .iter()
            .copied()
            .filter(|id| self.scene.parent_of(*id) == Some(self.root))
            .collect()
    }

    /// Unselect objects that are no longer attached to the root.
    ///
    /// Returns true if anything was unselected.
    pub(crate) fn prune_selection(&mut self) -> bool {
        let stale: Vec<ObjectId> = self
            .selection
            .iter()
            .copied()
            .filter(|id| self.scene.parent_of(*id) != Some(self.root))
            .collect();

        for id in &stale {
            self.selection.unselect(id);
        }
        !stale.is_empty()
    }

    /// Check that the selected markers match selection membership and that
    /// ghosts only exist during a drag.
    pub fn check_invariants(&self) -> Result<(), String> {
        let members: BTreeSet<ObjectId> = self.selection.iter().copied().collect();
        let visuals = self.visuals.borrow();

        if visuals.selected != members {
            return Err(format!(
                "selected markers {:?} out of sync with selection {:?}",
                visuals.selected, members
            ));
        }
        if visuals.is_dragging() && !self.gesture.is_moving() {
            return Err("ghosts visible without an active drag".to_string());
        }
        Ok(())
    }
}
