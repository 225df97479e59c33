//! Board state dump
//!
//! Serializes a snapshot of the board to JSON. Written by the runtime on
//! export requests and at the end of a replay. Selection markers are part of
//! the dump's `selection` list, never of the object entries themselves.

use std::path::Path;

use serde::Serialize;

use crate::model::BoardModel;
use crate::scene::{BlockKind, ObjectId, SceneObject};

#[derive(Debug, Clone, Serialize)]
pub struct StateDump {
    pub timestamp: u64,
    pub objects: Vec<ObjectDump>,
    /// Ids of attached root objects, bottom-most first
    pub order: Vec<ObjectId>,
    pub selection: Vec<ObjectId>,
    pub history: HistoryDump,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectDump {
    pub id: ObjectId,
    pub label: String,
    pub kind: BlockKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display-only rendering of the position, e.g. `24px 60px`
    pub display: String,
    pub attached: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryDump {
    pub undo_count: usize,
    pub redo_count: usize,
    pub next_undo: Option<&'static str>,
    pub next_redo: Option<&'static str>,
}

impl ObjectDump {
    fn from_object(object: &SceneObject) -> Self {
        Self {
            id: object.id,
            label: object.label.clone(),
            kind: object.kind,
            x: object.position.x,
            y: object.position.y,
            width: object.size.width,
            height: object.size.height,
            display: object.position.to_string(),
            attached: object.is_attached(),
        }
    }
}

impl StateDump {
    pub fn from_model(model: &BoardModel) -> Self {
        use crate::history::Operation;

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            timestamp,
            objects: model
                .scene
                .objects()
                .into_iter()
                .map(ObjectDump::from_object)
                .collect(),
            order: model.attached().to_vec(),
            selection: model.selection.items().to_vec(),
            history: HistoryDump {
                undo_count: model.history.undo_count(),
                redo_count: model.history.redo_count(),
                next_undo: model.history.peek_undo().map(|op| op.label()),
                next_redo: model.history.peek_redo().map(|op| op.label()),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize dump: {}", e))
    }

    /// Write the dump as pretty JSON, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write dump to {}: {}", path.display(), e))?;

        tracing::info!("Wrote state dump to {}", path.display());
        Ok(())
    }
}
