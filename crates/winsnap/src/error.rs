//! Top-level errors surfaced by the binary.
use std::result::Result as StdResult;

use thiserror::Error;

/// Result alias for the binary.
pub type Result<T> = StdResult<T, Error>;

/// Startup and command failures.
#[derive(Error, Debug)]
pub enum Error {
    /// The config file could not be read or is invalid.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),

    /// The window backend is unavailable.
    #[error("window backend: {0}")]
    WinOps(#[from] mac_winops::Error),

    /// The keyboard tap could not start.
    #[error("keyboard tap: {0}")]
    Hotkey(#[from] mac_hotkey::Error),

    /// A command could not be carried out.
    #[error("{0}")]
    Engine(#[from] winsnap_engine::Error),

    /// One or more required permissions are not granted.
    #[error("required permissions missing; grant them in System Settings > Privacy & Security")]
    PermissionsMissing,
}
