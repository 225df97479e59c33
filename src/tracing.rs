//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, gesture and history state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=history=debug,gesture=trace` - scoped filtering
//! - `RUST_LOG=dragboard::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dragboard/logs/dragboard.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::BoardModel;
use crate::scene::ObjectId;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var (default `warn`).
/// File logging writes to `~/.config/dragboard/logs/dragboard.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dragboard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of board state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub selected: Vec<ObjectId>,
    pub attached: usize,
    pub undo_count: usize,
    pub redo_count: usize,
    pub dragging: bool,
}

impl BoardSnapshot {
    pub fn from_model(model: &BoardModel) -> Self {
        Self {
            selected: model.selection.items().to_vec(),
            attached: model.scene.attached_count(),
            undo_count: model.history.undo_count(),
            redo_count: model.history.redo_count(),
            dragging: model.gesture.is_moving(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BoardSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.selected != other.selected {
            let ids: Vec<String> = other.selected.iter().map(ToString::to_string).collect();
            changes.push(format!("selection: [{}]", ids.join(", ")));
        }
        if self.attached != other.attached {
            changes.push(format!("attached: {} → {}", self.attached, other.attached));
        }
        if self.undo_count != other.undo_count || self.redo_count != other.redo_count {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_count, self.redo_count, other.undo_count, other.redo_count
            ));
        }
        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
