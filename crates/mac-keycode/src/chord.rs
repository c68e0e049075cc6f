use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Key, Modifier, chord_modifiers};

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Set of modifier keys held down for this chord.
    pub modifiers: HashSet<Modifier>,
    /// The non-modifier key for this chord.
    pub key: Key,
}

impl Chord {
    /// Build a chord from a key and any iterable of modifiers.
    pub fn new(key: Key, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key,
        }
    }

    /// Parses a chord string of the form "ctrl+opt+left".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key spec.
    /// - Modifiers may use aliases handled by `Modifier::from_spec` (e.g., cmd/ctrl/opt/alt/shift).
    /// - The key accepts the full `Key::from_spec` space (digits, punctuation, aliases, or names).
    pub fn parse(s: &str) -> Option<Self> {
        let mut buf: Vec<&str> = s.split('+').collect();
        let key = Key::from_spec(buf.pop()?.trim())?;
        let mut modifiers = HashSet::new();
        for m in buf {
            let mt = m.trim();
            if mt.is_empty() {
                return None;
            }
            modifiers.insert(Modifier::from_spec(mt)?);
        }
        Some(Self { modifiers, key })
    }

    /// Exact-set match against a live key event.
    ///
    /// Both sides are reduced to the primary chord modifiers first, so a
    /// chord bound to `ctrl+opt` does not fire while shift or command is also
    /// held, and Caps Lock never affects the result.
    pub fn matches(&self, key: Key, mods: &HashSet<Modifier>) -> bool {
        self.key == key && chord_modifiers(&self.modifiers) == chord_modifiers(mods)
    }

    fn modifier_order(m: &Modifier) -> usize {
        match m {
            // Canonical order: Command, Option, Control, Shift, Function, CapsLock, Right*
            Modifier::Command => 0,
            Modifier::Option => 1,
            Modifier::Control => 2,
            Modifier::Shift => 3,
            Modifier::Function => 4,
            Modifier::CapsLock => 5,
            Modifier::RightCommand => 6,
            Modifier::RightControl => 7,
            Modifier::RightOption => 8,
            Modifier::RightShift => 9,
        }
    }

    /// Returns the canonical string form of this chord using:
    /// - Canonical modifier order (Command, Option, Control, Shift, Function, CapsLock, Right*...) and
    /// - Canonical spec name for each component (via Modifier::to_spec and Key::to_spec).
    pub fn to_string_canonical(&self) -> String {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(Self::modifier_order);
        let mut out: Vec<String> = mods.into_iter().map(Modifier::to_spec).collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}
