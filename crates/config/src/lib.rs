//! Winsnap configuration.
//!
//! The config file is RON and every field is optional:
//!
//! ```ron
//! (
//!     tolerances: (edge: 40.0, center_scale: 0.8),
//!     bindings: {
//!         "snap-left": "ctrl+opt+h",
//!         "center": "",
//!     },
//! )
//! ```
//!
//! Bindings override the built-in keymap per command; an empty chord string
//! unbinds the command.

use std::{
    env,
    path::{Path, PathBuf},
};

mod error;
mod loader;

pub use error::Error;
pub use loader::{load, load_from_path};
use winsnap_engine::{Keymap, Tolerances};

/// Resolved configuration, ready to hand to the dispatcher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Classifier and layout deadbands.
    pub tolerances: Tolerances,
    /// Effective key bindings: defaults with overrides applied.
    pub keymap: Keymap,
}

impl Config {
    /// Parse and validate RON text.
    pub fn from_ron(text: &str) -> Result<Self, Error> {
        loader::parse(text)
    }
}

/// Determine the preferred user config path (`~/.winsnap/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".winsnap");
    p.push("config.ron");
    p
}

/// Resolve the effective config path.
///
/// An explicit path is always used. Otherwise `~/.winsnap/config.ron` is used
/// when it exists, and `None` means built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}
