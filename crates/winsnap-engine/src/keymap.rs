//! Chord to command bindings.

use std::collections::HashSet;

use mac_keycode::{Chord, Key, Modifier};

use crate::{Command, Error, Result};

/// Control and Option: progressive snaps, maximize, center.
const CTRL_OPT: &[Modifier] = &[Modifier::Control, Modifier::Option];
/// Control, Option and Command: display moves.
const CTRL_OPT_CMD: &[Modifier] = &[Modifier::Control, Modifier::Option, Modifier::Command];
/// Control, Option and Shift: thirds.
const CTRL_OPT_SHIFT: &[Modifier] = &[Modifier::Control, Modifier::Option, Modifier::Shift];

/// Built-in bindings.
const DEFAULT_BINDINGS: &[(Command, &[Modifier], Key)] = &[
    (Command::SnapLeft, CTRL_OPT, Key::LeftArrow),
    (Command::SnapRight, CTRL_OPT, Key::RightArrow),
    (Command::SnapUp, CTRL_OPT, Key::UpArrow),
    (Command::SnapDown, CTRL_OPT, Key::DownArrow),
    (Command::Maximize, CTRL_OPT, Key::Return),
    (Command::Center, CTRL_OPT, Key::C),
    (Command::MoveToPrevDisplay, CTRL_OPT_CMD, Key::LeftArrow),
    (Command::MoveToNextDisplay, CTRL_OPT_CMD, Key::RightArrow),
    (Command::LeftThird, CTRL_OPT_SHIFT, Key::D),
    (Command::CenterThird, CTRL_OPT_SHIFT, Key::F),
    (Command::RightThird, CTRL_OPT_SHIFT, Key::G),
    (Command::LeftTwoThirds, CTRL_OPT_SHIFT, Key::E),
    (Command::RightTwoThirds, CTRL_OPT_SHIFT, Key::T),
];

/// A single chord bound to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Chord that triggers the command.
    pub chord: Chord,
    /// Command to run.
    pub command: Command,
}

/// Ordered set of bindings. Each command has at most one chord and each
/// chord maps to at most one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    /// Bindings in catalog order.
    bindings: Vec<Binding>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|(command, mods, key)| Binding {
                    chord: Chord::new(*key, mods.iter().copied()),
                    command: *command,
                })
                .collect(),
        }
    }
}

impl Keymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// All bindings.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The command bound to a live key event, if any.
    ///
    /// Modifier sets must match exactly: `ctrl+opt+left` does not fire while
    /// shift is also held.
    pub fn lookup(&self, key: Key, mods: &HashSet<Modifier>) -> Option<Command> {
        self.bindings
            .iter()
            .find(|b| b.chord.matches(key, mods))
            .map(|b| b.command)
    }

    /// The chord currently bound to `command`.
    pub fn chord_for(&self, command: Command) -> Option<&Chord> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| &b.chord)
    }

    /// Bind `command` to `chord`, replacing any previous chord for it.
    ///
    /// Fails if another command already owns an equivalent chord.
    pub fn bind(&mut self, command: Command, chord: Chord) -> Result<()> {
        if let Some(existing) = self
            .bindings
            .iter()
            .find(|b| b.command != command && same_chord(&b.chord, &chord))
        {
            return Err(Error::BindingConflict {
                chord: chord.to_string(),
                existing: existing.command,
                requested: command,
            });
        }
        match self.bindings.iter_mut().find(|b| b.command == command) {
            Some(b) => b.chord = chord,
            None => self.bindings.push(Binding { chord, command }),
        }
        self.bindings.sort_by_key(|b| b.command);
        Ok(())
    }

    /// Remove the binding for `command`.
    pub fn unbind(&mut self, command: Command) {
        self.bindings.retain(|b| b.command != command);
    }
}

/// Two chords fire on the same events.
fn same_chord(a: &Chord, b: &Chord) -> bool {
    a.matches(b.key, &b.modifiers)
}
