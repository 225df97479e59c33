//! dragboard - direct-manipulation board engine
//!
//! This crate provides the core of a board editor where visual objects are
//! selected, dragged, added and deleted with full undo/redo:
//!
//! - [`history`]: linear undo/redo over reversible [`Operation`]s
//! - [`operations`]: add, delete and move operations over a [`Scene`]
//! - [`selection`]: an observable selection set
//! - [`gesture`]: click vs. drag recognition with a distance threshold
//!
//! Around that core sits an Elm-style controller ([`Msg`] → [`update`] →
//! [`Cmd`]) plus the config, logging and replay plumbing used by the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dump;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod observer;
pub mod operations;
pub mod replay;
pub mod scene;
pub mod selection;
pub mod tracing;
pub mod update;
pub mod visual;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::BoardConfig;
pub use geometry::{Point, Size, Vector};
pub use gesture::GestureTracker;
pub use history::{History, Operation};
pub use messages::Msg;
pub use model::BoardModel;
pub use scene::{ContainerId, ObjectId, Scene};
pub use selection::SelectionSet;
pub use update::update;
