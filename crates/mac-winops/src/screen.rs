//! Screen enumeration via AppKit.

use objc2_app_kit::NSScreen;
use objc2_foundation::MainThreadMarker;
use tracing::trace;
use winsnap_engine::{DisplayId, RawScreen, Rect};

/// Snapshot every attached screen in AppKit (bottom-left) coordinates.
///
/// The first screen in `NSScreen::screens` hosts the menu bar and is flagged
/// primary. Identifiers are positions in that list, so they are only stable
/// until the next reconfiguration.
pub(crate) fn screens(mtm: MainThreadMarker) -> Vec<RawScreen> {
    NSScreen::screens(mtm)
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let fr = s.frame();
            let vf = s.visibleFrame();
            let raw = RawScreen {
                id: DisplayId(i as u32),
                frame: Rect::new(fr.origin.x, fr.origin.y, fr.size.width, fr.size.height),
                visible_frame: Rect::new(vf.origin.x, vf.origin.y, vf.size.width, vf.size.height),
                primary: i == 0,
            };
            trace!(id = %raw.id, frame = %raw.frame, visible = %raw.visible_frame, "screen");
            raw
        })
        .collect()
}
