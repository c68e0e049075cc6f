//! Geometry primitives and the fixed layouts the engine places windows into.
//!
//! All rectangles here live in placement space: origin at the top-left of the
//! primary display, y growing downward. Conversion from the bottom-left space
//! reported by the display server happens once, in [`flip_rect`].

use std::fmt;

/// Tolerance used when deciding whether two frames are the same placement.
pub const SAME_FRAME_EPS: f64 = 1.0;

/// An axis-aligned rectangle with `f64` coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from origin and size.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    /// Left edge.
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[inline]
    /// Horizontal center.
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }

    #[inline]
    /// Vertical center.
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// True when the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        approx_eq(self.x, other.x, eps)
            && approx_eq(self.y, other.y, eps)
            && approx_eq(self.w, other.w, eps)
            && approx_eq(self.h, other.h, eps)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.left().min(other.left());
        let y = self.top().min(other.top());
        Self {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}) {:.1}x{:.1}",
            self.x, self.y, self.w, self.h
        )
    }
}

#[inline]
/// Scalar comparison within `eps`.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[inline]
/// Length of the overlap between the intervals `[a1, a2]` and `[b1, b2]`.
pub fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0.0)
}

/// Convert a bottom-left-origin y coordinate to top-left origin.
///
/// `primary_height` is the full height of the primary display, whose bottom
/// edge anchors the bottom-left space.
#[inline]
pub fn flip_y(y: f64, h: f64, primary_height: f64) -> f64 {
    primary_height - (y + h)
}

/// Convert a bottom-left-origin rectangle to top-left origin.
pub fn flip_rect(r: Rect, primary_height: f64) -> Rect {
    Rect {
        y: flip_y(r.y, r.h, primary_height),
        ..r
    }
}

// Grid helpers ----------------------------------------------------------------

/// Cell `(col, row)` of a `cols` by `rows` grid laid over `area`.
///
/// Tiles are floored to whole points and the last column and row absorb the
/// remainder, so a row of cells always spans `area` exactly.
pub fn grid_cell_rect(area: &Rect, cols: u32, rows: u32, col: u32, row: u32) -> Rect {
    let c = f64::from(cols.max(1));
    let r = f64::from(rows.max(1));
    let tile_w = (area.w / c).floor().max(1.0);
    let tile_h = (area.h / r).floor().max(1.0);
    let rem_w = area.w - tile_w * c;
    let rem_h = area.h - tile_h * r;

    let x = area.x + tile_w * f64::from(col);
    let w = if col == cols.saturating_sub(1) {
        tile_w + rem_w
    } else {
        tile_w
    };
    let y = area.y + tile_h * f64::from(row);
    let h = if row == rows.saturating_sub(1) {
        tile_h + rem_h
    } else {
        tile_h
    };
    Rect { x, y, w, h }
}

/// Full-height span of `span` adjacent columns starting at `first`.
fn column_span(area: &Rect, cols: u32, first: u32, span: u32) -> Rect {
    let last = first + span.max(1) - 1;
    grid_cell_rect(area, cols, 1, first, 0).union(&grid_cell_rect(area, cols, 1, last, 0))
}

// Layouts ---------------------------------------------------------------------

/// Left half of `usable`.
pub fn left_half(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 1, 0, 0)
}

/// Right half of `usable`.
pub fn right_half(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 1, 1, 0)
}

/// Top half of `usable`.
pub fn top_half(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 1, 2, 0, 0)
}

/// Bottom half of `usable`.
pub fn bottom_half(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 1, 2, 0, 1)
}

/// Top-left quarter of `usable`.
pub fn top_left_quarter(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 2, 0, 0)
}

/// Top-right quarter of `usable`.
pub fn top_right_quarter(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 2, 1, 0)
}

/// Bottom-left quarter of `usable`.
pub fn bottom_left_quarter(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 2, 0, 1)
}

/// Bottom-right quarter of `usable`.
pub fn bottom_right_quarter(usable: &Rect) -> Rect {
    grid_cell_rect(usable, 2, 2, 1, 1)
}

/// Left third of `usable`.
pub fn left_third(usable: &Rect) -> Rect {
    column_span(usable, 3, 0, 1)
}

/// Middle third of `usable`.
pub fn center_third(usable: &Rect) -> Rect {
    column_span(usable, 3, 1, 1)
}

/// Right third of `usable`.
pub fn right_third(usable: &Rect) -> Rect {
    column_span(usable, 3, 2, 1)
}

/// Left two thirds of `usable`.
pub fn left_two_thirds(usable: &Rect) -> Rect {
    column_span(usable, 3, 0, 2)
}

/// Right two thirds of `usable`.
pub fn right_two_thirds(usable: &Rect) -> Rect {
    column_span(usable, 3, 1, 2)
}

/// The whole of `usable`.
pub fn maximize(usable: &Rect) -> Rect {
    *usable
}

/// A rectangle `scale` times the size of `usable`, centered within it.
pub fn center(usable: &Rect, scale: f64) -> Rect {
    let w = (usable.w * scale).floor();
    let h = (usable.h * scale).floor();
    Rect {
        x: usable.x + ((usable.w - w) / 2.0).floor(),
        y: usable.y + ((usable.h - h) / 2.0).floor(),
        w,
        h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: Rect = Rect::new(0.0, 25.0, 1920.0, 1055.0);

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.cx(), 25.0);
        assert_eq!(r.cy(), 40.0);
    }

    #[test]
    fn contains_point_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(10.0, 10.0));
        assert!(!r.contains_point(-0.1, 0.0));
        assert!(!r.contains_point(0.0, 10.1));
    }

    #[test]
    fn overlap_1d_cases() {
        assert_eq!(overlap_1d(0.0, 10.0, 5.0, 15.0), 5.0);
        assert_eq!(overlap_1d(0.0, 10.0, 10.0, 20.0), 0.0);
        assert_eq!(overlap_1d(0.0, 10.0, 20.0, 30.0), 0.0);
        assert_eq!(overlap_1d(0.0, 10.0, 2.0, 3.0), 1.0);
    }

    #[test]
    fn flip_primary_and_stacked_displays() {
        // Primary frame sits at the origin in both spaces.
        assert_eq!(flip_y(0.0, 1080.0, 1080.0), 0.0);
        // Visible frame below a 25pt menu bar.
        assert_eq!(flip_y(0.0, 1055.0, 1080.0), 25.0);
        // A display stacked above the primary has a negative top-left y.
        assert_eq!(flip_y(1080.0, 900.0, 1080.0), -900.0);
    }

    #[test]
    fn halves() {
        assert_eq!(left_half(&U), Rect::new(0.0, 25.0, 960.0, 1055.0));
        assert_eq!(right_half(&U), Rect::new(960.0, 25.0, 960.0, 1055.0));
        assert_eq!(top_half(&U), Rect::new(0.0, 25.0, 1920.0, 527.0));
        assert_eq!(bottom_half(&U), Rect::new(0.0, 552.0, 1920.0, 528.0));
    }

    #[test]
    fn quarters() {
        assert_eq!(top_left_quarter(&U), Rect::new(0.0, 25.0, 960.0, 527.0));
        assert_eq!(top_right_quarter(&U), Rect::new(960.0, 25.0, 960.0, 527.0));
        assert_eq!(bottom_left_quarter(&U), Rect::new(0.0, 552.0, 960.0, 528.0));
        assert_eq!(
            bottom_right_quarter(&U),
            Rect::new(960.0, 552.0, 960.0, 528.0)
        );
    }

    #[test]
    fn thirds_and_two_thirds() {
        assert_eq!(left_third(&U), Rect::new(0.0, 25.0, 640.0, 1055.0));
        assert_eq!(center_third(&U), Rect::new(640.0, 25.0, 640.0, 1055.0));
        assert_eq!(right_third(&U), Rect::new(1280.0, 25.0, 640.0, 1055.0));
        assert_eq!(left_two_thirds(&U), Rect::new(0.0, 25.0, 1280.0, 1055.0));
        assert_eq!(right_two_thirds(&U), Rect::new(640.0, 25.0, 1280.0, 1055.0));
    }

    #[test]
    fn odd_width_remainder_goes_last() {
        let u = Rect::new(0.0, 0.0, 1441.0, 900.0);
        assert_eq!(left_half(&u).w, 720.0);
        assert_eq!(right_half(&u), Rect::new(720.0, 0.0, 721.0, 900.0));
        assert_eq!(right_third(&u).w, 481.0);
    }

    #[test]
    fn center_is_scaled_and_centered() {
        let c = center(&Rect::new(0.0, 0.0, 1000.0, 800.0), 0.75);
        assert_eq!(c, Rect::new(125.0, 100.0, 750.0, 600.0));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 30.0, 15.0));
    }
}
