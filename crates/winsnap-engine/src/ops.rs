//! The window backend seam.
//!
//! [`WinOps`] is everything the engine needs from the platform: read and
//! write the focused window's frame, and enumerate screens. The macOS
//! implementation lives in `mac-winops`; [`MockWinOps`] scripts it for tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;

use crate::{Error, Result, display::RawScreen, geom::Rect};

/// Window backend used by the dispatcher.
pub trait WinOps {
    /// Frame of the focused window in top-left placement coordinates.
    fn focused_frame(&self) -> Result<Rect>;

    /// Move and resize the focused window.
    fn set_focused_frame(&self, frame: Rect) -> Result<()>;

    /// Every connected screen in bottom-left coordinates, primary flagged.
    fn screens(&self) -> Result<Vec<RawScreen>>;
}

/// Scripted [`WinOps`] that records every call.
///
/// `set_focused_frame` updates the served frame, so consecutive commands
/// see the result of the previous one.
#[derive(Clone, Default)]
pub struct MockWinOps {
    /// Call log, one entry per backend call.
    calls: Arc<Mutex<Vec<String>>>,
    /// Frame served by `focused_frame`; `None` means no focused window.
    frame: Arc<Mutex<Option<Rect>>>,
    /// Screens served by `screens`.
    screens: Arc<Mutex<Vec<RawScreen>>>,
    /// Make `set_focused_frame` fail.
    fail_set_frame: Arc<AtomicBool>,
    /// Make `screens` fail.
    fail_screens: Arc<AtomicBool>,
}

impl MockWinOps {
    /// An empty backend: no window, no screens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focused window frame.
    pub fn set_frame(&self, frame: Option<Rect>) {
        *self.frame.lock() = frame;
    }

    /// The focused window frame as last written.
    pub fn frame(&self) -> Option<Rect> {
        *self.frame.lock()
    }

    /// Replace the reported screens.
    pub fn set_screens(&self, screens: Vec<RawScreen>) {
        *self.screens.lock() = screens;
    }

    /// Make frame writes fail.
    pub fn set_fail_set_frame(&self, v: bool) {
        self.fail_set_frame.store(v, Ordering::SeqCst);
    }

    /// Make screen enumeration fail.
    pub fn set_fail_screens(&self, v: bool) {
        self.fail_screens.store(v, Ordering::SeqCst);
    }

    /// A copy of the call log.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// True if an exact call entry was recorded.
    pub fn calls_contains(&self, s: &str) -> bool {
        self.calls.lock().iter().any(|x| x == s)
    }

    /// Number of recorded frame writes.
    pub fn set_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with("set_focused_frame"))
            .count()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Record a call.
    fn note(&self, s: &str) {
        self.calls.lock().push(s.to_string());
    }
}

impl WinOps for MockWinOps {
    fn focused_frame(&self) -> Result<Rect> {
        self.note("focused_frame");
        self.frame().ok_or(Error::NoFocusedWindow)
    }

    fn set_focused_frame(&self, frame: Rect) -> Result<()> {
        self.note(&format!("set_focused_frame {frame}"));
        if self.fail_set_frame.load(Ordering::SeqCst) {
            return Err(Error::Backend("set_focused_frame failed".into()));
        }
        self.set_frame(Some(frame));
        Ok(())
    }

    fn screens(&self) -> Result<Vec<RawScreen>> {
        self.note("screens");
        if self.fail_screens.load(Ordering::SeqCst) {
            return Err(Error::Backend("screens failed".into()));
        }
        Ok(self.screens.lock().clone())
    }
}
