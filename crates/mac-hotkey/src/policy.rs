use std::collections::HashSet;

use mac_keycode::Key;

use crate::EventKind;

/// Tracks which keys had their key-down swallowed.
///
/// Only the initial key-down reaches the handler. Auto-repeats and the
/// matching key-up follow whatever the handler decided for that press, so an
/// app never sees a key-up without its key-down.
#[derive(Debug, Default)]
pub(crate) struct KeyTracker {
    /// Keys whose current press was swallowed.
    held: HashSet<Key>,
}

impl KeyTracker {
    /// Decide whether to swallow an event. `dispatch` runs only for initial
    /// key-downs and reports whether the handler consumed the press.
    pub(crate) fn intercept(
        &mut self,
        kind: EventKind,
        key: Key,
        is_repeat: bool,
        dispatch: impl FnOnce() -> bool,
    ) -> bool {
        match kind {
            EventKind::KeyDown if is_repeat => self.held.contains(&key),
            EventKind::KeyDown => {
                let consumed = dispatch();
                if consumed {
                    self.held.insert(key);
                } else {
                    self.held.remove(&key);
                }
                consumed
            }
            EventKind::KeyUp => self.held.remove(&key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn swallowed_press_swallows_repeat_and_release() {
        let mut t = KeyTracker::default();
        assert!(t.intercept(EventKind::KeyDown, Key::LeftArrow, false, || true));
        let calls = Cell::new(0);
        let d = t.intercept(EventKind::KeyDown, Key::LeftArrow, true, || {
            calls.set(calls.get() + 1);
            true
        });
        assert!(d);
        assert_eq!(calls.get(), 0);
        assert!(t.intercept(EventKind::KeyUp, Key::LeftArrow, false, || false));
        assert!(!t.intercept(EventKind::KeyUp, Key::LeftArrow, false, || true));
    }

    #[test]
    fn passed_press_passes_repeat_and_release() {
        let mut t = KeyTracker::default();
        assert!(!t.intercept(EventKind::KeyDown, Key::A, false, || false));
        assert!(!t.intercept(EventKind::KeyDown, Key::A, true, || true));
        assert!(!t.intercept(EventKind::KeyUp, Key::A, false, || true));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut t = KeyTracker::default();
        assert!(t.intercept(EventKind::KeyDown, Key::C, false, || true));
        assert!(!t.intercept(EventKind::KeyDown, Key::D, false, || false));
        assert!(!t.intercept(EventKind::KeyUp, Key::D, false, || false));
        assert!(t.intercept(EventKind::KeyUp, Key::C, false, || false));
    }

    #[test]
    fn release_without_press_passes() {
        let mut t = KeyTracker::default();
        assert!(!t.intercept(EventKind::KeyUp, Key::Return, false, || true));
    }
}
