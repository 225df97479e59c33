//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects returned from `update()` for the runtime to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Board state changed and should be redrawn
    Redraw,
    /// Write a state export
    Export,
}
