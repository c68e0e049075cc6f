use std::result::Result as StdResult;

use thiserror::Error;

use crate::Command;

/// Convenient result type used throughout the engine.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by the engine and its window backends.
///
/// Inside a command invocation every variant degrades to a no-op; they are
/// kept typed so the cause can be logged and tested.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// No focusable window is frontmost.
    #[error("Focused window not available")]
    NoFocusedWindow,

    /// The backend reported no displays at all.
    #[error("No displays available")]
    NoDisplays,

    /// A window backend call failed.
    #[error("window backend: {0}")]
    Backend(String),

    /// A command name did not match the catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A tolerance value is outside its allowed range.
    #[error("invalid tolerance {field}={value}: {reason}")]
    InvalidTolerance {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },

    /// Two commands were bound to the same chord.
    #[error("chord {chord} is already bound to {existing}; cannot bind it to {requested}")]
    BindingConflict {
        /// Canonical chord spec.
        chord: String,
        /// Command that already owns the chord.
        existing: Command,
        /// Command that asked for it.
        requested: Command,
    },
}
