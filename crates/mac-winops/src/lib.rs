//! macOS window backend for winsnap.
//!
//! [`MacWinOps`] reads and writes the focused window's frame through the
//! Accessibility API and enumerates screens through `NSScreen`. Off macOS the
//! crate still builds, and every operation reports [`Error::Unsupported`].

#[cfg(target_os = "macos")]
mod ax;
mod error;
mod ops;
#[cfg(target_os = "macos")]
mod screen;

pub use error::{Error, Result};
pub use ops::MacWinOps;
