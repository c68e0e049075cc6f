//! Key events in, window placements out.
//!
//! A [`Dispatcher`] owns the keymap and tolerances and borrows the window
//! backend. Each call re-reads the focused window and the screen layout, so
//! monitor hot-plug or a window dragged by hand between presses is always
//! observed.

use std::{collections::HashSet, fmt};

use mac_keycode::{Key, Modifier};
use tracing::{debug, trace};

use crate::{
    Command, Error, Keymap, Result, Tolerances,
    display::DisplayDirectory,
    geom::SAME_FRAME_EPS,
    machine::{self, Placement},
    ops::WinOps,
};

/// What the event source should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The event triggered a command; swallow it.
    Consume,
    /// Not ours; deliver it unchanged.
    PassThrough,
}

/// Why a command left the window where it was.
#[derive(Debug, Clone, PartialEq)]
pub enum NoOp {
    /// The command has nothing to do from the current geometry, e.g. snapping
    /// past the outermost display.
    NoTarget,
    /// The target frame equals the current frame.
    Unchanged,
    /// The backend could not provide or apply a frame.
    Unavailable(Error),
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => f.write_str("no target"),
            Self::Unchanged => f.write_str("already in place"),
            Self::Unavailable(e) => write!(f, "{e}"),
        }
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The window was moved.
    Applied(Placement),
    /// The window was left alone.
    NoOp(NoOp),
}

impl Outcome {
    /// True when the window was moved.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Maps key events to commands and runs them against a window backend.
pub struct Dispatcher<'a> {
    /// Window backend.
    ops: &'a dyn WinOps,
    /// Active bindings.
    keymap: Keymap,
    /// Classifier and layout deadbands.
    tolerances: Tolerances,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over `ops`.
    pub fn new(ops: &'a dyn WinOps, keymap: Keymap, tolerances: Tolerances) -> Self {
        Self {
            ops,
            keymap,
            tolerances,
        }
    }

    /// The active keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// The active tolerances.
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Handle one key-down event.
    ///
    /// A matched chord runs its command and is always consumed, even when
    /// the command turns out to be a no-op. Everything else passes through.
    pub fn handle_key(&self, key: Key, mods: &HashSet<Modifier>) -> Disposition {
        let Some(command) = self.keymap.lookup(key, mods) else {
            trace!(?key, ?mods, "no binding");
            return Disposition::PassThrough;
        };
        self.invoke(command);
        Disposition::Consume
    }

    /// Run `command` once against the focused window.
    pub fn invoke(&self, command: Command) -> Outcome {
        let outcome = match self.try_invoke(command) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::NoOp(NoOp::Unavailable(e)),
        };
        match &outcome {
            Outcome::Applied(p) => debug!(%command, frame = %p.frame, display = ?p.display, "applied"),
            Outcome::NoOp(reason) => debug!(%command, %reason, "no-op"),
        }
        outcome
    }

    /// Read state, plan, and apply.
    fn try_invoke(&self, command: Command) -> Result<Outcome> {
        let window = self.ops.focused_frame()?;
        let dirs = DisplayDirectory::from_screens(self.ops.screens()?).ok_or(Error::NoDisplays)?;
        let Some(placement) = machine::plan(command, &window, &dirs, &self.tolerances) else {
            return Ok(Outcome::NoOp(NoOp::NoTarget));
        };
        if placement.frame.approx_eq(&window, SAME_FRAME_EPS) {
            return Ok(Outcome::NoOp(NoOp::Unchanged));
        }
        self.ops.set_focused_frame(placement.frame)?;
        Ok(Outcome::Applied(placement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::{DisplayId, RawScreen},
        geom::Rect,
        ops::MockWinOps,
    };

    fn ctrl_opt() -> HashSet<Modifier> {
        [Modifier::Control, Modifier::Option].into_iter().collect()
    }

    fn mock() -> MockWinOps {
        let ops = MockWinOps::new();
        ops.set_screens(vec![RawScreen {
            id: DisplayId(1),
            frame: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            visible_frame: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            primary: true,
        }]);
        ops.set_frame(Some(Rect::new(100.0, 100.0, 800.0, 600.0)));
        ops
    }

    #[test]
    fn matched_event_is_consumed_and_applied() {
        let ops = mock();
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        assert_eq!(
            d.handle_key(Key::LeftArrow, &ctrl_opt()),
            Disposition::Consume
        );
        assert_eq!(ops.frame(), Some(Rect::new(0.0, 0.0, 960.0, 1080.0)));
    }

    #[test]
    fn unmatched_event_passes_through_without_backend_calls() {
        let ops = mock();
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        assert_eq!(d.handle_key(Key::A, &ctrl_opt()), Disposition::PassThrough);
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn no_window_is_a_consumed_no_op() {
        let ops = mock();
        ops.set_frame(None);
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        assert_eq!(
            d.invoke(Command::Maximize),
            Outcome::NoOp(NoOp::Unavailable(Error::NoFocusedWindow))
        );
        assert_eq!(d.handle_key(Key::Return, &ctrl_opt()), Disposition::Consume);
        assert_eq!(ops.set_count(), 0);
    }

    #[test]
    fn no_screens_is_a_no_op() {
        let ops = mock();
        ops.set_screens(Vec::new());
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        assert_eq!(
            d.invoke(Command::Center),
            Outcome::NoOp(NoOp::Unavailable(Error::NoDisplays))
        );
    }

    #[test]
    fn unchanged_target_skips_the_setter() {
        let ops = mock();
        ops.set_frame(Some(Rect::new(0.5, 0.0, 1920.0, 1080.0)));
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        assert_eq!(
            d.invoke(Command::Maximize),
            Outcome::NoOp(NoOp::Unchanged)
        );
        assert_eq!(ops.set_count(), 0);
    }

    #[test]
    fn setter_failure_is_reported() {
        let ops = mock();
        ops.set_fail_set_frame(true);
        let d = Dispatcher::new(&ops, Keymap::default(), Tolerances::default());
        let out = d.invoke(Command::LeftThird);
        assert!(matches!(
            out,
            Outcome::NoOp(NoOp::Unavailable(Error::Backend(_)))
        ));
        assert_eq!(ops.frame(), Some(Rect::new(100.0, 100.0, 800.0, 600.0)));
    }

    #[test]
    fn tolerances_are_honored() {
        let ops = mock();
        let tol = Tolerances {
            center_scale: 0.5,
            ..Default::default()
        };
        let d = Dispatcher::new(&ops, Keymap::default(), tol);
        assert!(d.invoke(Command::Center).is_applied());
        assert_eq!(ops.frame(), Some(Rect::new(480.0, 270.0, 960.0, 540.0)));
    }
}
