//! mac-keycode: Virtual keycodes and specs for macOS.
//!
//! - `Key`: Enum of macOS virtual keycodes usable in bindings.
//! - `Modifier`: Enum of modifier keys with conversions to/from `Key`.
//! - Spec helpers: `Key::from_spec`, `Key::to_spec`, and
//!   `Modifier::from_spec`, `Modifier::to_spec`.
//! - `Chord`: a modifier set plus one key, parsed from specs like `ctrl+opt+left`.
//!
//! `Key` carries the exact hardware codes from the HIToolbox `kVK_*`
//! constants and is `repr(u16)`.

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::{Modifier, chord_modifiers, modifiers_from_cg_flags};

mod chord;
pub use chord::Chord;
