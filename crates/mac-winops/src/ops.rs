//! [`WinOps`] backed by Accessibility and AppKit.

#[cfg(target_os = "macos")]
use objc2_foundation::MainThreadMarker;
use tracing::debug;
use winsnap_engine::{RawScreen, Rect, Result as EngineResult, WinOps};

#[cfg(target_os = "macos")]
use crate::{ax, screen};
use crate::error::{Error, Result};

/// The macOS window backend.
///
/// Screen enumeration needs AppKit, so construction is only possible on the
/// main thread and the value is deliberately `!Send`.
#[derive(Debug, Clone, Copy)]
pub struct MacWinOps {
    #[cfg(target_os = "macos")]
    /// Proof that we are on the AppKit main thread.
    mtm: MainThreadMarker,
}

#[cfg(target_os = "macos")]
impl MacWinOps {
    /// Create a backend. Fails off the main thread or without Accessibility.
    pub fn new() -> Result<Self> {
        let mtm = MainThreadMarker::new().ok_or(Error::MainThread)?;
        ax::ax_check()?;
        debug!("mac window backend ready");
        Ok(Self { mtm })
    }

    /// Frame of the focused window, top-left coordinates.
    pub fn focused_frame(&self) -> Result<Rect> {
        let win = ax::focused_window()?;
        ax::window_frame(&win)
    }

    /// Move and resize the focused window.
    pub fn set_focused_frame(&self, frame: Rect) -> Result<()> {
        let win = ax::focused_window()?;
        let current = ax::window_frame(&win)?;
        ax::set_window_frame(&win, &current, &frame)
    }

    /// Attached screens in AppKit coordinates.
    pub fn screens(&self) -> Vec<RawScreen> {
        screen::screens(self.mtm)
    }
}

#[cfg(not(target_os = "macos"))]
impl MacWinOps {
    /// Always fails: there is no window backend on this platform.
    pub fn new() -> Result<Self> {
        debug!("mac window backend unavailable on this platform");
        Err(Error::Unsupported)
    }

    /// Always fails on this platform.
    pub fn focused_frame(&self) -> Result<Rect> {
        Err(Error::Unsupported)
    }

    /// Always fails on this platform.
    pub fn set_focused_frame(&self, _frame: Rect) -> Result<()> {
        Err(Error::Unsupported)
    }

    /// No screens on this platform.
    pub fn screens(&self) -> Vec<RawScreen> {
        Vec::new()
    }
}

impl WinOps for MacWinOps {
    fn focused_frame(&self) -> EngineResult<Rect> {
        Ok(Self::focused_frame(self)?)
    }

    fn set_focused_frame(&self, frame: Rect) -> EngineResult<()> {
        Ok(Self::set_focused_frame(self, frame)?)
    }

    fn screens(&self) -> EngineResult<Vec<RawScreen>> {
        Ok(Self::screens(self))
    }
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn unsupported_off_macos() {
        assert_eq!(MacWinOps::new().unwrap_err(), Error::Unsupported);
        let ops = MacWinOps {};
        assert_eq!(
            WinOps::focused_frame(&ops),
            Err(winsnap_engine::Error::Backend(
                "Operation not supported".into()
            ))
        );
        assert_eq!(WinOps::screens(&ops), Ok(Vec::new()));
    }
}
