//! Display enumeration snapshot in placement coordinates.
//!
//! The display server reports screens with a bottom-left origin anchored at
//! the bottom of the primary display. [`DisplayDirectory::from_screens`]
//! converts every rectangle to top-left space once, so everything downstream
//! compares like with like.

use std::fmt;

use crate::geom::{Rect, flip_rect, overlap_1d};

/// Identifier of a display within one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display-{}", self.0)
    }
}

/// A screen as reported by the platform, in bottom-left coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScreen {
    /// Platform identifier.
    pub id: DisplayId,
    /// Full screen rectangle.
    pub frame: Rect,
    /// Screen rectangle minus menu bar and dock.
    pub visible_frame: Rect,
    /// Whether this screen hosts the menu bar.
    pub primary: bool,
}

/// A display in placement coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Display {
    /// Identifier carried over from the raw screen.
    pub id: DisplayId,
    /// Full display rectangle.
    pub frame: Rect,
    /// Rectangle windows may occupy.
    pub usable: Rect,
}

/// Displays ordered left to right, with a designated primary.
#[derive(Debug, Clone)]
pub struct DisplayDirectory {
    /// Sorted by usable x, then usable y.
    displays: Vec<Display>,
    /// Index of the primary display in `displays`.
    primary: usize,
}

impl DisplayDirectory {
    /// Build a directory from raw screens. Returns `None` when `screens` is empty.
    pub fn from_screens(screens: Vec<RawScreen>) -> Option<Self> {
        let primary_raw = screens
            .iter()
            .find(|s| s.primary)
            .or_else(|| screens.first())?;
        let primary_id = primary_raw.id;
        let primary_height = primary_raw.frame.h;

        let mut displays: Vec<Display> = screens
            .into_iter()
            .map(|s| Display {
                id: s.id,
                frame: flip_rect(s.frame, primary_height),
                usable: flip_rect(s.visible_frame, primary_height),
            })
            .collect();
        displays.sort_by(|a, b| {
            a.usable
                .x
                .total_cmp(&b.usable.x)
                .then(a.usable.y.total_cmp(&b.usable.y))
        });
        let primary = displays
            .iter()
            .position(|d| d.id == primary_id)
            .unwrap_or(0);
        Some(Self { displays, primary })
    }

    /// The designated primary display.
    pub fn primary(&self) -> &Display {
        &self.displays[self.primary]
    }

    /// Number of displays. At least one, since `from_screens` rejects an
    /// empty screen list.
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Whether the directory holds no displays.
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    /// Displays in left-to-right order.
    pub fn iter(&self) -> impl Iterator<Item = &Display> {
        self.displays.iter()
    }

    /// Look up a display by id.
    pub fn get(&self, id: DisplayId) -> Option<&Display> {
        self.displays.iter().find(|d| d.id == id)
    }

    /// Position of `id` in left-to-right order.
    pub fn index_of(&self, id: DisplayId) -> Option<usize> {
        self.displays.iter().position(|d| d.id == id)
    }

    /// The display a window belongs to.
    ///
    /// First the display whose usable rect contains the window center, then
    /// the display with the greatest horizontal overlap, then the primary.
    /// Window frames can briefly disagree with display geometry while a
    /// monitor is being attached or removed, hence the fallbacks.
    pub fn display_containing(&self, window: &Rect) -> &Display {
        let (cx, cy) = (window.cx(), window.cy());
        if let Some(d) = self
            .displays
            .iter()
            .find(|d| d.usable.contains_point(cx, cy))
        {
            return d;
        }

        let mut best: Option<(&Display, f64)> = None;
        for d in &self.displays {
            let overlap = overlap_1d(
                window.left(),
                window.right(),
                d.usable.left(),
                d.usable.right(),
            );
            if overlap > 0.0 && best.is_none_or(|(_, b)| overlap > b) {
                best = Some((d, overlap));
            }
        }
        best.map_or_else(|| self.primary(), |(d, _)| d)
    }

    /// The display `steps` positions away from `of` in left-to-right order.
    ///
    /// Negative steps move left. Returns `None` when the result falls outside
    /// the directory or `of` is unknown.
    pub fn neighbor(&self, of: DisplayId, steps: isize) -> Option<&Display> {
        let idx = self.index_of(of)?;
        let target = idx.checked_add_signed(steps)?;
        self.displays.get(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u32, frame: Rect, visible: Rect, primary: bool) -> RawScreen {
        RawScreen {
            id: DisplayId(id),
            frame,
            visible_frame: visible,
            primary,
        }
    }

    /// Primary 1920x1080 with a 25pt menu bar, plus a 1440x900 display to
    /// its right aligned at the bottom edge.
    fn two_displays() -> Vec<RawScreen> {
        vec![
            raw(
                2,
                Rect::new(1920.0, 0.0, 1440.0, 900.0),
                Rect::new(1920.0, 0.0, 1440.0, 875.0),
                false,
            ),
            raw(
                1,
                Rect::new(0.0, 0.0, 1920.0, 1080.0),
                Rect::new(0.0, 0.0, 1920.0, 1055.0),
                true,
            ),
        ]
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(DisplayDirectory::from_screens(Vec::new()).is_none());
        let single = DisplayDirectory::from_screens(vec![RawScreen {
            id: DisplayId(7),
            frame: Rect::new(0.0, 0.0, 800.0, 600.0),
            visible_frame: Rect::new(0.0, 0.0, 800.0, 600.0),
            primary: false,
        }])
        .expect("one screen");
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
    }

    #[test]
    fn converts_to_top_left_and_sorts() {
        let dirs = DisplayDirectory::from_screens(two_displays()).expect("dirs");
        let ids: Vec<u32> = dirs.iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2]);

        let primary = dirs.primary();
        assert_eq!(primary.id, DisplayId(1));
        assert_eq!(primary.frame, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(primary.usable, Rect::new(0.0, 25.0, 1920.0, 1055.0));

        let second = dirs.get(DisplayId(2)).expect("second");
        assert_eq!(second.frame, Rect::new(1920.0, 180.0, 1440.0, 900.0));
        assert_eq!(second.usable, Rect::new(1920.0, 205.0, 1440.0, 875.0));
    }

    #[test]
    fn primary_defaults_to_first_reported() {
        let mut screens = two_displays();
        for s in &mut screens {
            s.primary = false;
        }
        let dirs = DisplayDirectory::from_screens(screens).expect("dirs");
        assert_eq!(dirs.primary().id, DisplayId(2));
        // Flipped against display 2's height of 900.
        assert_eq!(dirs.primary().frame.y, 0.0);
    }

    #[test]
    fn containing_prefers_center_point() {
        let dirs = DisplayDirectory::from_screens(two_displays()).expect("dirs");
        let w = Rect::new(1800.0, 300.0, 400.0, 300.0);
        assert_eq!(dirs.display_containing(&w).id, DisplayId(2));
        let w = Rect::new(100.0, 100.0, 400.0, 300.0);
        assert_eq!(dirs.display_containing(&w).id, DisplayId(1));
    }

    #[test]
    fn containing_falls_back_to_overlap_then_primary() {
        let dirs = DisplayDirectory::from_screens(two_displays()).expect("dirs");
        // Center is below every display but the window overlaps display 2 most.
        let w = Rect::new(1700.0, 3000.0, 800.0, 100.0);
        assert_eq!(dirs.display_containing(&w).id, DisplayId(2));
        // Entirely off to the right: no overlap at all.
        let w = Rect::new(9000.0, 9000.0, 100.0, 100.0);
        assert_eq!(dirs.display_containing(&w).id, DisplayId(1));
    }

    #[test]
    fn neighbor_bounds() {
        let dirs = DisplayDirectory::from_screens(two_displays()).expect("dirs");
        assert_eq!(
            dirs.neighbor(DisplayId(1), 1).map(|d| d.id),
            Some(DisplayId(2))
        );
        assert_eq!(
            dirs.neighbor(DisplayId(2), -1).map(|d| d.id),
            Some(DisplayId(1))
        );
        assert!(dirs.neighbor(DisplayId(1), -1).is_none());
        assert!(dirs.neighbor(DisplayId(2), 1).is_none());
        assert!(dirs.neighbor(DisplayId(9), 0).is_none());
    }

    #[test]
    fn single_display_has_no_neighbors() {
        let screens = vec![raw(
            7,
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            true,
        )];
        let dirs = DisplayDirectory::from_screens(screens).expect("dirs");
        assert_eq!(dirs.len(), 1);
        assert!(dirs.neighbor(DisplayId(7), 1).is_none());
        assert!(dirs.neighbor(DisplayId(7), -1).is_none());
    }
}
