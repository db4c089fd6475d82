//! Geometry kernel: points, axis-aligned bounds, and distance queries.
//!
//! Everything here is stateless. Shapes and the interaction engine build
//! their hit-tests and transforms on top of these functions.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// This point scaled by `(sx, sy)` relative to `center`.
    #[must_use]
    pub fn scaled_about(self, sx: f64, sy: f64, center: Point) -> Self {
        Self {
            x: center.x + (self.x - center.x) * sx,
            y: center.y + (self.y - center.y) * sy,
        }
    }
}

/// Axis-aligned bounding box. `width` and `height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment test: points on the edges are inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Squared Euclidean distance. Cheaper than [`distance`] when only ordering matters.
#[must_use]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Distance from `p` to the closed segment `start`→`end`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint. A zero-length segment degenerates to the
/// distance to `start`.
#[must_use]
pub fn point_to_segment_distance(p: Point, start: Point, end: Point) -> f64 {
    let len_sq = distance_squared(start, end);
    if len_sq == 0.0 {
        return distance(p, start);
    }

    let t = ((p.x - start.x) * (end.x - start.x) + (p.y - start.y) * (end.y - start.y)) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let projection = Point::new(start.x + t * (end.x - start.x), start.y + t * (end.y - start.y));
    distance(p, projection)
}

/// Tightest axis-aligned box around `points`. Empty input yields `Bounds::default()`.
#[must_use]
pub fn compute_bounds(points: &[Point]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::default();
    };

    let (min_x, min_y, max_x, max_y) = points.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y)),
    );

    Bounds { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y }
}
