//! Global keyboard interception for winsnap.
//!
//! [`run`] installs a CoreGraphics event tap on the calling thread and blocks
//! in its run loop. Each initial key-down is handed to the caller's handler,
//! which decides synchronously whether the event is swallowed:
//!
//! ```no_run
//! mac_hotkey::run(|press| {
//!     println!("{:?} {:?}", press.key, press.modifiers);
//!     false
//! })
//! .ok();
//! ```
//!
//! Requires the Input Monitoring permission.

use std::collections::HashSet;

use mac_keycode::{Key, Modifier};

mod error;
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
mod policy;
#[cfg(target_os = "macos")]
mod sys;

pub use error::{Error, Result};

/// Key transition reported by the tap.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventKind {
    /// Key pressed.
    KeyDown,
    /// Key released.
    KeyUp,
}

/// An initial key press, as seen by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held at the time of the press.
    pub modifiers: HashSet<Modifier>,
}

/// Run the event tap until the run loop stops.
///
/// `handler` returns `true` to swallow the press. Auto-repeats and the
/// release of a swallowed press are swallowed too, without calling it.
#[cfg(target_os = "macos")]
pub fn run<'h>(handler: impl FnMut(&KeyPress) -> bool + 'h) -> Result<()> {
    sys::run_event_loop(handler)
}

/// Event taps are macOS only.
#[cfg(not(target_os = "macos"))]
pub fn run<'h>(_handler: impl FnMut(&KeyPress) -> bool + 'h) -> Result<()> {
    Err(Error::Unsupported)
}
