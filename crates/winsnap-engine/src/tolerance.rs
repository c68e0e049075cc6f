//! Deadbands used by the classifier and the layout functions.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Pixel distance within which a window edge counts as touching a usable edge.
pub const EDGE_TOLERANCE: f64 = 50.0;
/// Smallest width ratio that still counts as half-snapped.
pub const SNAP_MIN_WIDTH_RATIO: f64 = 0.35;
/// Largest width ratio that still counts as half-snapped.
pub const SNAP_MAX_WIDTH_RATIO: f64 = 0.65;
/// Height ratio above which a half-width window is a half rather than a quarter.
pub const HALF_MIN_HEIGHT_RATIO: f64 = 0.7;
/// Height ratio at or below which a top-aligned half-width window is unclassified.
pub const QUARTER_MIN_HEIGHT_RATIO: f64 = 0.3;
/// Height ratio above which a full-width window is maximized.
pub const MAXIMIZED_MIN_HEIGHT_RATIO: f64 = 0.9;
/// Size of a centered window relative to the usable area.
pub const CENTER_SCALE: f64 = 0.70;

/// Tunable deadbands. Every field falls back to its default when omitted
/// from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// Edge and dimension tolerance in points.
    pub edge: f64,
    /// Lower bound of the half-snapped width band.
    pub snap_min_width_ratio: f64,
    /// Upper bound of the half-snapped width band.
    pub snap_max_width_ratio: f64,
    /// Half versus quarter height cutoff.
    pub half_min_height_ratio: f64,
    /// Quarter versus unclassified height cutoff.
    pub quarter_min_height_ratio: f64,
    /// Maximized versus top/bottom half height cutoff.
    pub maximized_min_height_ratio: f64,
    /// Scale applied by the `center` layout.
    pub center_scale: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            edge: EDGE_TOLERANCE,
            snap_min_width_ratio: SNAP_MIN_WIDTH_RATIO,
            snap_max_width_ratio: SNAP_MAX_WIDTH_RATIO,
            half_min_height_ratio: HALF_MIN_HEIGHT_RATIO,
            quarter_min_height_ratio: QUARTER_MIN_HEIGHT_RATIO,
            maximized_min_height_ratio: MAXIMIZED_MIN_HEIGHT_RATIO,
            center_scale: CENTER_SCALE,
        }
    }
}

impl Tolerances {
    /// Check ranges and the ordering between related cutoffs.
    pub fn validate(&self) -> Result<()> {
        if !self.edge.is_finite() || self.edge < 0.0 {
            return Err(invalid("edge", self.edge, "must be a finite value >= 0"));
        }
        let ratios = [
            ("snap_min_width_ratio", self.snap_min_width_ratio),
            ("snap_max_width_ratio", self.snap_max_width_ratio),
            ("half_min_height_ratio", self.half_min_height_ratio),
            ("quarter_min_height_ratio", self.quarter_min_height_ratio),
            ("maximized_min_height_ratio", self.maximized_min_height_ratio),
            ("center_scale", self.center_scale),
        ];
        for (field, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, value, "must be in (0, 1]"));
            }
        }
        if self.snap_min_width_ratio > self.snap_max_width_ratio {
            return Err(invalid(
                "snap_min_width_ratio",
                self.snap_min_width_ratio,
                "must not exceed snap_max_width_ratio",
            ));
        }
        if self.quarter_min_height_ratio >= self.half_min_height_ratio {
            return Err(invalid(
                "quarter_min_height_ratio",
                self.quarter_min_height_ratio,
                "must be below half_min_height_ratio",
            ));
        }
        Ok(())
    }
}

/// Shorthand for an [`Error::InvalidTolerance`].
fn invalid(field: &'static str, value: f64, reason: &'static str) -> Error {
    Error::InvalidTolerance {
        field,
        value,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Tolerances::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        let t = Tolerances {
            edge: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(Error::InvalidTolerance { field: "edge", .. })
        ));

        let t = Tolerances {
            center_scale: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(Error::InvalidTolerance {
                field: "center_scale",
                ..
            })
        ));

        let t = Tolerances {
            snap_min_width_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bands() {
        let t = Tolerances {
            snap_min_width_ratio: 0.7,
            snap_max_width_ratio: 0.6,
            ..Default::default()
        };
        assert!(t.validate().is_err());

        let t = Tolerances {
            quarter_min_height_ratio: 0.8,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }
}
