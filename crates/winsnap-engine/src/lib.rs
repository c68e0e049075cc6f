//! Winsnap placement engine
//!
//! Turns a command (snap left, maximize, left third, ...) plus the live
//! geometry of the focused window and the connected displays into a target
//! frame:
//! - [`classify`] recognizes which canonical layout a window resembles
//! - [`machine`] computes the next placement, including falling through onto
//!   an adjacent display and proportional display moves
//! - [`Dispatcher`] maps key chords to commands and applies the result
//!   through a [`WinOps`] backend
//!
//! The engine is platform-neutral and keeps no state between invocations;
//! every call re-reads the window frame and the display layout.

mod command;
mod dispatch;
mod error;
mod keymap;
mod ops;
mod tolerance;

pub mod classify;
pub mod display;
pub mod geom;
pub mod machine;


pub use classify::SnapState;
pub use command::{Command, Direction};
pub use dispatch::{Dispatcher, Disposition, NoOp, Outcome};
pub use display::{Display, DisplayDirectory, DisplayId, RawScreen};
pub use error::{Error, Result};
pub use geom::Rect;
pub use keymap::{Binding, Keymap};
pub use machine::Placement;
pub use ops::{MockWinOps, WinOps};
pub use tolerance::Tolerances;
