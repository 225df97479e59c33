//! Message types for the Elm-style architecture
//!
//! All board state changes flow through these message types.

use crate::geometry::{Point, Size};
use crate::scene::ObjectId;

/// Which pointer button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Raw pointer input, already translated to board coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Button pressed
    Down { button: PointerButton, position: Point },
    /// Pointer moved (only meaningful while a button is held)
    Move { position: Point },
    /// Button released. `target` is the object under the pointer, if any.
    Up {
        button: PointerButton,
        position: Point,
        ctrl: bool,
        target: Option<ObjectId>,
    },
}

/// Description of an object to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewObject {
    pub label: String,
    pub position: Point,
    pub size: Size,
}

/// Edits recorded in history (or history navigation itself)
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Undo the last operation (Ctrl+Z)
    Undo,
    /// Redo the last undone operation (Ctrl+Y)
    Redo,
    /// Delete every selected object (Delete key)
    DeleteSelection,
    /// Split Markdown text into blocks and add them to the board
    InsertMarkdown(String),
    /// Add explicitly described objects to the board
    InsertObjects(Vec<NewObject>),
}

/// Application-level requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Request a state export (P key)
    Export,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Edit(EditMsg),
    App(AppMsg),
}
