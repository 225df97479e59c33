//! Update functions for the Elm-style architecture
//!
//! All board state transformations flow through these functions.

use crate::commands::Cmd;
use crate::markdown::{layout_blocks, parse_blocks};
use crate::messages::{AppMsg, EditMsg, Msg, NewObject, PointerButton, PointerMsg};
use crate::model::BoardModel;
use crate::operations::{AddObjects, DeleteObjects, MoveObjects};
use crate::scene::{BlockKind, ObjectId};

#[cfg(debug_assertions)]
use crate::tracing::BoardSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, error, span, Level};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and logs any
/// marker invariant violation after every message.
#[inline]
pub fn update(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => update_pointer(model, m),
        Msg::Edit(m) => update_edit(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at input rate; keep them out of debug logs
    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = BoardSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = BoardSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "board", %diff, "state changed");
    }

    if let Err(e) = model.check_invariants() {
        error!(target: "board", msg = %msg_name, "invariant violated: {}", e);
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Edit(EditMsg::InsertMarkdown(text)) => {
            format!("Edit::InsertMarkdown({} bytes)", text.len())
        }
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

/// Handle pointer messages: gesture tracking, click selection, drag moves
pub fn update_pointer(model: &mut BoardModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down { button, position } => {
            if button != PointerButton::Primary {
                return None;
            }

            model.set_pointer_held(true);
            model.gesture.start(position);
            None
        }

        PointerMsg::Move { position } => {
            if !model.pointer_held() {
                return None;
            }

            model.gesture.move_to(position);
            if !model.gesture.is_moving() {
                return None;
            }

            let delta = model.gesture.delta();
            model.set_ghost_offset(delta);
            Some(Cmd::Redraw)
        }

        PointerMsg::Up {
            button,
            position,
            ctrl,
            target,
        } => {
            if button != PointerButton::Primary || !model.pointer_held() {
                return None;
            }
            model.set_pointer_held(false);

            // Classify before stop() resets the drag state
            let was_moving = model.gesture.is_moving();
            model.gesture.stop(position);

            if was_moving {
                finish_drag(model)
            } else {
                click(model, target, ctrl)
            }
        }
    }
}

fn click(model: &mut BoardModel, target: Option<ObjectId>, ctrl: bool) -> Option<Cmd> {
    let changed = match target {
        None if ctrl => false,
        None => model.selection.clear(),
        Some(id) if ctrl => {
            model.selection.toggle(id);
            true
        }
        Some(id) => {
            let cleared = model.selection.clear();
            model.selection.select(id) || cleared
        }
    };

    changed.then_some(Cmd::Redraw)
}

fn finish_drag(model: &mut BoardModel) -> Option<Cmd> {
    let targets = model.selected_attached();
    if targets.is_empty() {
        return Some(Cmd::Redraw);
    }

    let op = MoveObjects::new(targets, model.gesture.delta());
    model.history.execute(op.into(), &mut model.scene);
    Some(Cmd::Redraw)
}

/// Handle edit messages: history navigation, deletion and inserts
pub fn update_edit(model: &mut BoardModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Undo => {
            if !model.history.undo(&mut model.scene) {
                return None;
            }
            // Undoing an add detaches objects; they can no longer be selected
            model.prune_selection();
            Some(Cmd::Redraw)
        }

        EditMsg::Redo => {
            if !model.history.redo(&mut model.scene) {
                return None;
            }
            model.prune_selection();
            Some(Cmd::Redraw)
        }

        EditMsg::DeleteSelection => {
            let targets = model.selected_attached();
            if targets.is_empty() {
                return None;
            }

            let op = DeleteObjects::new(model.root, targets);
            model.history.execute(op.into(), &mut model.scene);
            // Deleted objects are detached; they can no longer be selected
            model.selection.clear();
            Some(Cmd::Redraw)
        }

        EditMsg::InsertMarkdown(text) => {
            let blocks = parse_blocks(&text);
            if blocks.is_empty() {
                return None;
            }

            let layout = model.config.block_layout(model.next_insert_origin());
            let ids = layout_blocks(blocks, layout)
                .into_iter()
                .map(|placed| {
                    model.scene.create_object(
                        placed.block.source,
                        placed.block.kind,
                        placed.position,
                        placed.size,
                    )
                })
                .collect();

            insert(model, ids)
        }

        EditMsg::InsertObjects(objects) => {
            if objects.is_empty() {
                return None;
            }

            let ids = objects
                .into_iter()
                .map(|NewObject { label, position, size }| {
                    model
                        .scene
                        .create_object(label, BlockKind::Other, position, size)
                })
                .collect();

            insert(model, ids)
        }
    }
}

fn insert(model: &mut BoardModel, ids: Vec<ObjectId>) -> Option<Cmd> {
    let op = AddObjects::new(model.root, ids);
    model.history.execute(op.into(), &mut model.scene);
    Some(Cmd::Redraw)
}

/// Handle application messages
pub fn update_app(_model: &mut BoardModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Export => Some(Cmd::Export),
    }
}
