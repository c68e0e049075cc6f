//! Classify a window rectangle into the canonical layout it resembles.
//!
//! Classification is recomputed from live geometry on every query. Nothing
//! remembers where a window was placed, so a window dragged by hand is judged
//! by where it is now.

use std::fmt;

use crate::{Tolerances, geom::Rect};

/// The canonical layout a window currently resembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapState {
    /// Floating, custom-sized, or otherwise unrecognized.
    None,
    /// Left half of the usable area.
    LeftHalf,
    /// Right half of the usable area.
    RightHalf,
    /// Top half, full width.
    TopHalf,
    /// Bottom half, full width.
    BottomHalf,
    /// Top-left quarter.
    TopLeftQuarter,
    /// Top-right quarter.
    TopRightQuarter,
    /// Bottom-left quarter.
    BottomLeftQuarter,
    /// Bottom-right quarter.
    BottomRightQuarter,
    /// Whole usable area.
    Maximized,
}

impl SnapState {
    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
            Self::TopHalf => "top-half",
            Self::BottomHalf => "bottom-half",
            Self::TopLeftQuarter => "top-left-quarter",
            Self::TopRightQuarter => "top-right-quarter",
            Self::BottomLeftQuarter => "bottom-left-quarter",
            Self::BottomRightQuarter => "bottom-right-quarter",
            Self::Maximized => "maximized",
        }
    }
}

impl fmt::Display for SnapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side edge a half-width window hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Edge and size relationships between a window and a usable rectangle.
#[derive(Debug, Clone, Copy)]
struct Alignment {
    /// Left edges within tolerance.
    at_left: bool,
    /// Right edges within tolerance.
    at_right: bool,
    /// Top edges within tolerance.
    at_top: bool,
    /// Bottom edges within tolerance.
    at_bottom: bool,
    /// Width within tolerance of half the usable width.
    half_width: bool,
    /// Width within tolerance of the usable width.
    full_width: bool,
    /// `window.w / usable.w`.
    width_ratio: f64,
    /// `window.h / usable.h`.
    height_ratio: f64,
}

impl Alignment {
    /// Measure `window` against `usable`. `None` for a degenerate usable rect.
    fn measure(window: &Rect, usable: &Rect, tol: &Tolerances) -> Option<Self> {
        if usable.is_empty() {
            return None;
        }
        let near = |a: f64, b: f64| (a - b).abs() <= tol.edge;
        Some(Self {
            at_left: near(window.left(), usable.left()),
            at_right: near(window.right(), usable.right()),
            at_top: near(window.top(), usable.top()),
            at_bottom: near(window.bottom(), usable.bottom()),
            half_width: near(window.w, usable.w / 2.0),
            full_width: near(window.w, usable.w),
            width_ratio: window.w / usable.w,
            height_ratio: window.h / usable.h,
        })
    }

    /// Side edge alignment; left wins if both hold.
    fn side(&self) -> Option<Side> {
        if self.at_left {
            Some(Side::Left)
        } else if self.at_right {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Half-snapped against `side`: width within the snap band, touching that
    /// edge, and tall enough to be a half rather than a quarter.
    fn snapped(&self, side: Side, tol: &Tolerances) -> bool {
        let edge = match side {
            Side::Left => self.at_left,
            Side::Right => self.at_right,
        };
        edge && self.width_ratio >= tol.snap_min_width_ratio
            && self.width_ratio <= tol.snap_max_width_ratio
            && self.height_ratio > tol.half_min_height_ratio
    }
}

/// Classify `window` relative to `usable`. First matching rule wins.
pub fn classify(window: &Rect, usable: &Rect, tol: &Tolerances) -> SnapState {
    let Some(a) = Alignment::measure(window, usable, tol) else {
        return SnapState::None;
    };
    let hr = a.height_ratio;

    if a.half_width {
        let Some(side) = a.side() else {
            return SnapState::None;
        };
        let half = match side {
            Side::Left => SnapState::LeftHalf,
            Side::Right => SnapState::RightHalf,
        };
        if a.at_top {
            return if hr > tol.half_min_height_ratio {
                half
            } else if hr > tol.quarter_min_height_ratio {
                match side {
                    Side::Left => SnapState::TopLeftQuarter,
                    Side::Right => SnapState::TopRightQuarter,
                }
            } else {
                SnapState::None
            };
        }
        if a.at_bottom {
            return match side {
                Side::Left => SnapState::BottomLeftQuarter,
                Side::Right => SnapState::BottomRightQuarter,
            };
        }
        // Neither top nor bottom aligned: judged by side edge alone.
        return half;
    }

    if a.full_width {
        if hr > tol.maximized_min_height_ratio {
            return SnapState::Maximized;
        }
        if a.at_top {
            return SnapState::TopHalf;
        }
        if a.at_bottom {
            return SnapState::BottomHalf;
        }
    }
    SnapState::None
}

/// True when `window` occupies roughly the left half of `usable`.
pub fn is_snapped_left(window: &Rect, usable: &Rect, tol: &Tolerances) -> bool {
    Alignment::measure(window, usable, tol).is_some_and(|a| a.snapped(Side::Left, tol))
}

/// True when `window` occupies roughly the right half of `usable`.
pub fn is_snapped_right(window: &Rect, usable: &Rect, tol: &Tolerances) -> bool {
    Alignment::measure(window, usable, tol).is_some_and(|a| a.snapped(Side::Right, tol))
}
