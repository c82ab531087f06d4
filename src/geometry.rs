//! Geometric primitives for the rasterization kernel.
//!
//! Integer [`Point`]s are pixel coordinates; [`PointF`] carries the sub-pixel
//! precision needed by clipping and thick-line outlines. All types are plain
//! immutable values.

use crate::error::{Error, Result};

/// A pixel position with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Translate by the given offsets, or `None` if the result leaves the
    /// `i32` coordinate range.
    #[must_use]
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        let x = i32::try_from(i64::from(self.x) + dx).ok()?;
        let y = i32::try_from(i64::from(self.y) + dy).ok()?;
        Some(Self::new(x, y))
    }

    /// Chebyshev (chessboard) distance; 1 means 8-connected neighbours.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        PointF::from(self).distance(PointF::from(other))
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Round to the nearest pixel.
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A directed line segment `p1 -> p2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Start point.
    pub p1: PointF,
    /// End point.
    pub p2: PointF,
}

impl Segment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(p1: PointF, p2: PointF) -> Self {
        Self { p1, p2 }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(PointF::new(x1, y1), PointF::new(x2, y2))
    }

    /// Create a segment between two pixel positions.
    #[must_use]
    pub fn from_pixels(p1: Point, p2: Point) -> Self {
        Self::new(p1.into(), p2.into())
    }

    /// Direction vector `p2 - p1`.
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        (self.p2.x - self.p1.x, self.p2.y - self.p1.y)
    }

    /// Point at parameter `t` along `P(t) = p1 + t (p2 - p1)`.
    ///
    /// `t == 0` and `t == 1` return the endpoints exactly.
    #[must_use]
    pub fn point_at(&self, t: f64) -> PointF {
        if t <= 0.0 {
            self.p1
        } else if t >= 1.0 {
            self.p2
        } else {
            self.p1.lerp(self.p2, t)
        }
    }

    /// Get the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
}

/// A circle given by integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels. Zero degenerates to the center point.
    pub radius: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned clipping rectangle with `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipWindow {
    /// Create a window from already-ordered bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if `xmin > xmax`, `ymin > ymax`, or any
    /// bound is NaN.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        // Written as negated `<=` so NaN bounds are rejected too.
        if !(xmin <= xmax && ymin <= ymax) {
            return Err(Error::InvalidWindow { xmin, ymin, xmax, ymax });
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Create a window from any two opposite corners, swapping bounds as needed.
    #[must_use]
    pub fn from_corners(a: PointF, b: PointF) -> Self {
        Self {
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
        }
    }

    /// Left edge.
    #[must_use]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom edge.
    #[must_use]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right edge.
    #[must_use]
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top edge.
    #[must_use]
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Check if a point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Check if a point lies strictly inside the boundary.
    #[must_use]
    pub fn contains_strict(&self, p: PointF) -> bool {
        p.x > self.xmin && p.x < self.xmax && p.y > self.ymin && p.y < self.ymax
    }

    /// Corners in counter-clockwise order starting at `(xmin, ymin)`.
    #[must_use]
    pub fn corners(&self) -> [PointF; 4] {
        [
            PointF::new(self.xmin, self.ymin),
            PointF::new(self.xmax, self.ymin),
            PointF::new(self.xmax, self.ymax),
            PointF::new(self.xmin, self.ymax),
        ]
    }
}

/// A closed polygon boundary; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<PointF>,
}

impl Polygon {
    /// Create a polygon from its vertices in boundary order.
    #[must_use]
    pub fn new(vertices: Vec<PointF>) -> Self {
        Self { vertices }
    }

    /// Boundary vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[PointF] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the closed edge list `(v[i], v[i + 1 mod n])`.
    pub fn edges(&self) -> impl Iterator<Item = (PointF, PointF)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area (absolute value).
    #[must_use]
    pub fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice.abs() / 2.0
    }
}
