//! Permission checks for winsnap.
//!
//! Moving other applications' windows needs Accessibility; intercepting global
//! key events needs Input Monitoring. This crate only reports status. There
//! is no prompting logic here: the host is responsible for guiding the user
//! to System Settings if permissions are missing.
//!
//! All calls are fast and side-effect free. On platforms other than macOS
//! every check reports `false`.

use std::fmt;

#[cfg(target_os = "macos")]
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn CGPreflightListenEventAccess() -> bool;
}

/// Check if the process is trusted for Accessibility (reading and moving
/// windows of other applications).
pub fn accessibility_ok() -> bool {
    #[cfg(target_os = "macos")]
    {
        unsafe { AXIsProcessTrusted() }
    }
    #[cfg(not(target_os = "macos"))]
    {
        false
    }
}

/// Check if the application has the "Input Monitoring" permission.
///
/// Returns `true` when the process is allowed to listen for keyboard events
/// (CGEvent tap), and `false` otherwise.
pub fn input_monitoring_ok() -> bool {
    #[cfg(target_os = "macos")]
    {
        unsafe { CGPreflightListenEventAccess() }
    }
    #[cfg(not(target_os = "macos"))]
    {
        false
    }
}

/// Current permission status for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionsStatus {
    /// Accessibility (AX) permission; `true` if granted.
    pub accessibility_ok: bool,
    /// Input Monitoring permission; `true` if granted.
    pub input_ok: bool,
}

impl PermissionsStatus {
    /// True when everything winsnap needs is granted.
    pub fn all_ok(&self) -> bool {
        self.accessibility_ok && self.input_ok
    }
}

impl fmt::Display for PermissionsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |ok: bool| if ok { "granted" } else { "missing" };
        writeln!(f, "accessibility:    {}", mark(self.accessibility_ok))?;
        write!(f, "input monitoring: {}", mark(self.input_ok))
    }
}

/// Query both Accessibility and Input Monitoring permissions.
pub fn check_permissions() -> PermissionsStatus {
    PermissionsStatus {
        accessibility_ok: accessibility_ok(),
        input_ok: input_monitoring_ok(),
    }
}
