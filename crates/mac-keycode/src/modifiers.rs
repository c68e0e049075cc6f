use std::{collections::HashSet, convert::TryFrom};

use serde::{Deserialize, Serialize};

use crate::Key;

/// Declares `Modifier` with conversions to and from the same-named `Key`.
macro_rules! modifiers {
    ( $( $(#[$doc:meta])* $name:ident, )* ) => {
        /// Modifier keys available on macOS keyboards.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum Modifier {
            $( $(#[$doc])* $name, )*
        }

        impl Modifier {
            /// Every modifier, primary variants first.
            pub const ALL: &'static [Self] = &[ $( Self::$name, )* ];
        }

        impl From<Modifier> for Key {
            fn from(m: Modifier) -> Self {
                match m {
                    $( Modifier::$name => Self::$name, )*
                }
            }
        }

        impl TryFrom<Key> for Modifier {
            type Error = ();
            fn try_from(k: Key) -> Result<Self, Self::Error> {
                match k {
                    $( Key::$name => Ok(Self::$name), )*
                    _ => Err(()),
                }
            }
        }
    };
}

modifiers! {
    /// Command (⌘).
    Command,
    /// Shift (⇧).
    Shift,
    /// Option/Alt (⌥).
    Option,
    /// Control (⌃).
    Control,
    /// Caps Lock.
    CapsLock,
    /// Function (fn).
    Function,
    /// Right-hand Command.
    RightCommand,
    /// Right-hand Shift.
    RightShift,
    /// Right-hand Option.
    RightOption,
    /// Right-hand Control.
    RightControl,
}

/// `CGEventFlags` mask bits for the modifiers an event can report.
const CG_FLAG_BITS: [(u64, Modifier); 6] = [
    (1 << 16, Modifier::CapsLock),
    (1 << 17, Modifier::Shift),
    (1 << 18, Modifier::Control),
    (1 << 19, Modifier::Option),
    (1 << 20, Modifier::Command),
    (1 << 23, Modifier::Function),
];

impl Modifier {
    /// Parse a modifier from a chord component such as `ctrl`, `alt`, or
    /// `Shift`. Fails for keys that are not modifiers.
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(|k| Self::try_from(k).ok())
    }

    /// Lowercase text form used in rendered chords: `cmd`, `ctrl`, and `opt`
    /// for the big three, the key name otherwise.
    pub fn to_spec(self) -> String {
        match self {
            Self::Command => "cmd".to_string(),
            Self::Control => "ctrl".to_string(),
            Self::Option => "opt".to_string(),
            _ => Key::from(self).to_spec(),
        }
    }

    /// Collapses side-specific modifiers onto their primary variant.
    ///
    /// Event flags never distinguish sides, so bindings written with
    /// `RightCommand` and friends are compared as their primary form.
    pub fn primary(self) -> Self {
        match self {
            Self::RightCommand => Self::Command,
            Self::RightShift => Self::Shift,
            Self::RightOption => Self::Option,
            Self::RightControl => Self::Control,
            other => other,
        }
    }

    /// True for the four modifiers that participate in binding matches.
    pub fn is_chord_modifier(self) -> bool {
        matches!(
            self.primary(),
            Self::Command | Self::Shift | Self::Option | Self::Control
        )
    }
}

/// Reduce a modifier set to the primary chord modifiers (shift, control,
/// option, command). Caps Lock and fn are dropped.
pub fn chord_modifiers(mods: &HashSet<Modifier>) -> HashSet<Modifier> {
    mods.iter()
        .copied()
        .filter(|m| m.is_chord_modifier())
        .map(Modifier::primary)
        .collect()
}

/// Modifier set reported by a CoreGraphics event's flags.
pub fn modifiers_from_cg_flags(flags: u64) -> HashSet<Modifier> {
    CG_FLAG_BITS
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, m)| *m)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_modifier_maps_to_its_key_and_back() {
        for &m in Modifier::ALL {
            let k: Key = m.into();
            assert_eq!(Modifier::try_from(k), Ok(m));
        }
        assert_eq!(Modifier::try_from(Key::A), Err(()));
    }

    #[test]
    fn modifier_specs() {
        assert_eq!(Modifier::from_spec("cmd"), Some(Modifier::Command));
        assert_eq!(Modifier::from_spec("CTRL"), Some(Modifier::Control));
        assert_eq!(Modifier::from_spec("alt"), Some(Modifier::Option));
        assert_eq!(Modifier::from_spec("shift"), Some(Modifier::Shift));
        assert_eq!(Modifier::from_spec("fn"), Some(Modifier::Function));
        assert_eq!(Modifier::from_spec("left"), None);

        assert_eq!(Modifier::Option.to_spec(), "opt");
        assert_eq!(Modifier::Shift.to_spec(), "shift");
        assert_eq!(Modifier::RightCommand.to_spec(), "rightcommand");
    }

    #[test]
    fn cg_flags_ignore_non_modifier_bits() {
        // ctrl | opt | cmd, plus a device-dependent bit
        let flags = (1 << 18) | (1 << 19) | (1 << 20) | (1 << 8);
        let mods = modifiers_from_cg_flags(flags);
        let want: HashSet<Modifier> = [Modifier::Control, Modifier::Option, Modifier::Command]
            .into_iter()
            .collect();
        assert_eq!(mods, want);
    }

    #[test]
    fn caps_lock_flag_does_not_change_chord() {
        let flags = (1 << 16) | (1 << 18) | (1 << 19);
        let mods = modifiers_from_cg_flags(flags);
        assert!(mods.contains(&Modifier::CapsLock));
        let want: HashSet<Modifier> = [Modifier::Control, Modifier::Option].into_iter().collect();
        assert_eq!(chord_modifiers(&mods), want);
    }

    #[test]
    fn chord_modifiers_collapse_sides() {
        let mods: HashSet<Modifier> = [Modifier::RightControl, Modifier::Option, Modifier::Function]
            .into_iter()
            .collect();
        let want: HashSet<Modifier> = [Modifier::Control, Modifier::Option].into_iter().collect();
        assert_eq!(chord_modifiers(&mods), want);
    }
}
