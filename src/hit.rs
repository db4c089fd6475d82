//! Corner handles: positions, hit-testing, and the scale math they drive.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_HIT_RADIUS, MIN_SCALE_FACTOR};
use crate::geom::{Bounds, Point, distance};

/// One of the four resize handles on a selected shape's bounding box.
///
/// A miss is expressed as `Option::None` by the functions in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPoint {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPoint {
    /// Tie-break order for overlapping handles on tiny shapes.
    pub const ALL: [ControlPoint; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Centre of this handle on `bounds`.
    #[must_use]
    pub fn position(self, bounds: &Bounds) -> Point {
        match self {
            Self::TopLeft => bounds.top_left(),
            Self::TopRight => bounds.top_right(),
            Self::BottomLeft => bounds.bottom_left(),
            Self::BottomRight => bounds.bottom_right(),
        }
    }

    /// The diagonally opposite handle.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// CSS cursor name shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
        }
    }
}

/// All four handle centres for `bounds`, in tie-break order.
#[must_use]
pub fn handle_positions(bounds: &Bounds) -> [(ControlPoint, Point); 4] {
    ControlPoint::ALL.map(|cp| (cp, cp.position(bounds)))
}

/// First handle of `bounds` within [`HANDLE_HIT_RADIUS`] of `p`, if any.
#[must_use]
pub fn hit_control(bounds: &Bounds, p: Point) -> Option<ControlPoint> {
    handle_positions(bounds)
        .into_iter()
        .find(|&(_, center)| distance(p, center) <= HANDLE_HIT_RADIUS)
        .map(|(cp, _)| cp)
}

/// Fixed anchor for a scale gesture started on `control`: the opposite corner.
#[must_use]
pub fn scale_center(control: ControlPoint, bounds: &Bounds) -> Point {
    control.opposite().position(bounds)
}

/// Uniform scale factor for one pointer step of a corner drag.
///
/// The ratio of the current to the previous pointer distance from `center`
/// is inverted for `TopLeft` always, for `TopRight` when the pointer is left
/// of the centre, and for `BottomLeft` when it is right of the centre. The
/// result is floored at [`MIN_SCALE_FACTOR`]. A zero previous distance or a
/// non-finite result yields `1.0`.
#[must_use]
pub fn scale_factor(control: ControlPoint, center: Point, last: Point, current: Point) -> f64 {
    let d0 = distance(center, last);
    if d0 == 0.0 {
        return 1.0;
    }
    let raw = distance(center, current) / d0;

    let invert = match control {
        ControlPoint::TopLeft => true,
        ControlPoint::TopRight => current.x < center.x,
        ControlPoint::BottomLeft => current.x > center.x,
        ControlPoint::BottomRight => false,
    };
    let factor = if invert { 1.0 / raw } else { raw };

    if !factor.is_finite() {
        return 1.0;
    }
    factor.max(MIN_SCALE_FACTOR)
}
