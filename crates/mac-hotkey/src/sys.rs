//! macOS event tap (CoreGraphics) integration.
//!
//! CoreGraphics only suppresses delivery when the tap returns a NULL event.
//! The `core-graphics` crate maps `CallbackResult::Drop` to NULL at the C
//! boundary, so swallowed events return `Drop` and everything else `Keep`.

use std::{
    cell::RefCell,
    ffi::c_void,
    ptr,
    rc::Rc,
    sync::atomic::{AtomicPtr, Ordering},
};

use core_foundation::{
    base::TCFType,
    mach_port::CFMachPortRef,
    runloop::{CFRunLoop, kCFRunLoopCommonModes},
};
use core_graphics::event::{self as cge, CallbackResult};
use mac_keycode::{Key, modifiers_from_cg_flags};
use tracing::{debug, trace, warn};

use crate::{Error, EventKind, KeyPress, Result, policy::KeyTracker};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
}

// Minimal subset of CGEventField constants used by this module.
const FIELD_KEYBOARD_EVENT_AUTOREPEAT: u32 = 8;
const FIELD_KEYBOARD_EVENT_KEYCODE: u32 = 9;

/// Install the tap on the current thread and run its run loop.
pub(crate) fn run_event_loop<'h>(handler: impl FnMut(&KeyPress) -> bool + 'h) -> Result<()> {
    if !permissions::input_monitoring_ok() {
        warn!("input monitoring permission missing");
        return Err(Error::PermissionDenied("Input Monitoring"));
    }

    // Shared with the callback so it can re-enable the tap.
    let tap_port: Rc<AtomicPtr<c_void>> = Rc::new(AtomicPtr::new(ptr::null_mut()));
    let tap_port_cb = tap_port.clone();
    let handler = RefCell::new(handler);
    let tracker = RefCell::new(KeyTracker::default());

    debug!("creating event tap");
    let tap = cge::CGEventTap::new(
        cge::CGEventTapLocation::HID,
        cge::CGEventTapPlacement::HeadInsertEventTap,
        cge::CGEventTapOptions::Default,
        vec![cge::CGEventType::KeyDown, cge::CGEventType::KeyUp],
        move |_proxy, etype, event| match etype {
            cge::CGEventType::KeyDown | cge::CGEventType::KeyUp => {
                let keycode = event.get_integer_value_field(FIELD_KEYBOARD_EVENT_KEYCODE) as u16;
                let Some(key) = Key::from_keycode(keycode) else {
                    return CallbackResult::Keep;
                };
                let kind = if matches!(etype, cge::CGEventType::KeyDown) {
                    EventKind::KeyDown
                } else {
                    EventKind::KeyUp
                };
                let is_repeat = kind == EventKind::KeyDown
                    && event.get_integer_value_field(FIELD_KEYBOARD_EVENT_AUTOREPEAT) != 0;
                let flags = event.get_flags().bits();
                trace!(keycode, flags, ?key, ?kind, is_repeat, "tap event");

                let intercept = tracker.borrow_mut().intercept(kind, key, is_repeat, || {
                    let press = KeyPress {
                        key,
                        modifiers: modifiers_from_cg_flags(flags),
                    };
                    (handler.borrow_mut())(&press)
                });
                if intercept {
                    trace!(?key, "swallowing event");
                    CallbackResult::Drop
                } else {
                    CallbackResult::Keep
                }
            }
            cge::CGEventType::TapDisabledByTimeout | cge::CGEventType::TapDisabledByUserInput => {
                let p = tap_port_cb.load(Ordering::SeqCst) as CFMachPortRef;
                if !p.is_null() {
                    warn!("tap disabled by the OS; re-enabling");
                    unsafe { CGEventTapEnable(p, true) };
                }
                CallbackResult::Keep
            }
            _ => CallbackResult::Keep,
        },
    )
    .map_err(|_| {
        warn!("event tap creation failed");
        Error::EventTapStart
    })?;

    tap_port.store(
        tap.mach_port().as_concrete_TypeRef() as *mut c_void,
        Ordering::SeqCst,
    );

    let source = tap.mach_port().create_runloop_source(0).map_err(|_| {
        warn!("run loop source creation failed");
        Error::EventTapStart
    })?;
    let rl = CFRunLoop::get_current();
    let mode = unsafe { kCFRunLoopCommonModes };
    rl.add_source(&source, mode);
    tap.enable();

    debug!("event tap started");
    CFRunLoop::run_current();
    debug!("event tap exited");
    Ok(())
}
