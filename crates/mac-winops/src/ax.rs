//! Accessibility (AX) access to the focused window.

use std::{cell::RefCell, collections::HashMap, ffi::c_void, ptr, thread_local};

use core_foundation::{
    base::{CFRelease, CFTypeRef, TCFType},
    string::{CFString, CFStringRef},
};
use objc2_app_kit::NSWorkspace;
use tracing::debug;
use winsnap_engine::Rect;

use crate::error::{Error, Result};

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXUIElementCreateApplication(pid: i32) -> *mut c_void;
    fn AXUIElementCopyAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementSetAttributeValue(element: *mut c_void, attr: CFStringRef, value: CFTypeRef)
    -> i32;

    // AXValue helpers for CGPoint/CGSize
    fn AXValueCreate(theType: i32, valuePtr: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(theValue: CFTypeRef, theType: i32, valuePtr: *mut c_void) -> bool;
}

// AXValue type constants (per Apple docs)
const K_AX_VALUE_CGPOINT_TYPE: i32 = 1;
const K_AX_VALUE_CGSIZE_TYPE: i32 = 2;
// AX error for invalid UI element (window closed / stale reference)
const K_AX_ERROR_INVALID_UI_ELEMENT: i32 = -25202;
// Attribute exists but currently has no value (app without a focused window)
const K_AX_ERROR_NO_VALUE: i32 = -25212;

/// CoreGraphics `CGPoint` layout for AXValue interop.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
struct AxPoint {
    /// X coordinate.
    x: f64,
    /// Y coordinate.
    y: f64,
}

/// CoreGraphics `CGSize` layout for AXValue interop.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
struct AxSize {
    /// Width.
    width: f64,
    /// Height.
    height: f64,
}

thread_local! {
    static ATTR_STRINGS: RefCell<HashMap<&'static str, CFString>> = RefCell::new(HashMap::new());
}

/// Stable CFStringRef for an attribute name, cached per thread.
///
/// Static strings are not toll-free bridged; CoreFoundation may treat them as
/// NSString internally, which trips pointer authentication on recent macOS.
fn cfstr(name: &'static str) -> CFStringRef {
    ATTR_STRINGS.with(|cell| {
        let mut m = cell.borrow_mut();
        let s = m.entry(name).or_insert_with(|| CFString::new(name));
        s.as_concrete_TypeRef()
    })
}

/// Fail fast when Accessibility is not granted.
pub(crate) fn ax_check() -> Result<()> {
    if permissions::accessibility_ok() {
        Ok(())
    } else {
        Err(Error::Permission)
    }
}

/// Owned AXUIElementRef, released on drop.
pub(crate) struct AXElem(*mut c_void);

impl AXElem {
    /// Take ownership of a pointer returned by a Create/Copy function.
    fn from_create(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Self(ptr)) }
    }

    #[inline]
    /// Raw element pointer.
    fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for AXElem {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

/// Map an AX status code to an error.
fn ax_err(code: i32) -> Error {
    match code {
        K_AX_ERROR_INVALID_UI_ELEMENT => Error::WindowGone,
        K_AX_ERROR_NO_VALUE => Error::FocusedWindow,
        c => Error::AxCode(c),
    }
}

/// Copy an attribute value. The caller owns the returned reference.
fn copy_attr(element: *mut c_void, attr: CFStringRef) -> Result<CFTypeRef> {
    let mut v: CFTypeRef = ptr::null_mut();
    let err = unsafe { AXUIElementCopyAttributeValue(element, attr, &mut v) };
    if err != 0 {
        return Err(ax_err(err));
    }
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    Ok(v)
}

/// Read an AXValue-wrapped struct of AX type `ty`.
fn ax_get_value<T: Default>(element: *mut c_void, attr: CFStringRef, ty: i32) -> Result<T> {
    let v = copy_attr(element, attr)?;
    let mut out = T::default();
    let ok = unsafe { AXValueGetValue(v, ty, &mut out as *mut T as *mut c_void) };
    unsafe { CFRelease(v) };
    if !ok {
        return Err(Error::Unsupported);
    }
    Ok(out)
}

/// Write an AXValue-wrapped struct of AX type `ty`.
fn ax_set_value<T>(element: *mut c_void, attr: CFStringRef, ty: i32, value: &T) -> Result<()> {
    let v = unsafe { AXValueCreate(ty, value as *const T as *const c_void) };
    if v.is_null() {
        return Err(Error::Unsupported);
    }
    let err = unsafe { AXUIElementSetAttributeValue(element, attr, v) };
    unsafe { CFRelease(v) };
    if err != 0 {
        return Err(ax_err(err));
    }
    Ok(())
}

/// Process id of the frontmost application.
fn frontmost_pid() -> Result<i32> {
    let pid = unsafe {
        let ws = NSWorkspace::sharedWorkspace();
        ws.frontmostApplication().map(|app| app.processIdentifier())
    };
    pid.ok_or(Error::FocusedWindow)
}

/// The focused window of the frontmost application.
pub(crate) fn focused_window() -> Result<AXElem> {
    let pid = frontmost_pid()?;
    let app =
        AXElem::from_create(unsafe { AXUIElementCreateApplication(pid) }).ok_or(Error::AppElement)?;
    let win = copy_attr(app.as_ptr(), cfstr("AXFocusedWindow")).map_err(|e| match e {
        Error::Unsupported => Error::FocusedWindow,
        other => other,
    })?;
    debug!(pid, "focused window");
    AXElem::from_create(win as *mut c_void).ok_or(Error::FocusedWindow)
}

/// Current frame of `win` in top-left coordinates.
pub(crate) fn window_frame(win: &AXElem) -> Result<Rect> {
    let p: AxPoint = ax_get_value(win.as_ptr(), cfstr("AXPosition"), K_AX_VALUE_CGPOINT_TYPE)?;
    let s: AxSize = ax_get_value(win.as_ptr(), cfstr("AXSize"), K_AX_VALUE_CGSIZE_TYPE)?;
    Ok(Rect::new(p.x, p.y, s.width, s.height))
}

/// Move and resize `win` to `target`.
///
/// Growing windows are moved first so the new size is not clamped against
/// the old position; shrinking windows are resized first so the move is not
/// clamped against the old size.
pub(crate) fn set_window_frame(win: &AXElem, current: &Rect, target: &Rect) -> Result<()> {
    let pos = AxPoint {
        x: target.x,
        y: target.y,
    };
    let size = AxSize {
        width: target.w,
        height: target.h,
    };
    let set_pos = || ax_set_value(win.as_ptr(), cfstr("AXPosition"), K_AX_VALUE_CGPOINT_TYPE, &pos);
    let set_size = || ax_set_value(win.as_ptr(), cfstr("AXSize"), K_AX_VALUE_CGSIZE_TYPE, &size);

    let pos_first = target.w > current.w || target.h > current.h;
    debug!(%current, %target, pos_first, "set frame");
    if pos_first {
        set_pos()?;
        set_size()
    } else {
        set_size()?;
        set_pos()
    }
}
