//! Integer Bresenham line rasterization.

use crate::geometry::Point;

/// Rasterize the segment `p1 -> p2` into 8-connected pixels.
///
/// The walk advances one pixel per unit of the major axis and uses the
/// midpoint decision variable `p = 2·dminor − dmajor` to decide whether the
/// minor axis also steps. Both endpoints are included exactly once and the
/// result always starts at `p1`.
///
/// The walk itself always runs from the endpoint with the smaller major-axis
/// coordinate, so `rasterize_line(a, b)` is the reverse of
/// `rasterize_line(b, a)`.
///
/// Deltas and the decision variable are kept in `i64`, so any two `Point`s
/// are valid endpoints. The output holds `max(|dx|, |dy|) + 1` pixels.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::rasterize_line;
///
/// let pixels = rasterize_line(Point::new(0, 0), Point::new(3, 1));
/// assert_eq!(
///     pixels,
///     vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(3, 1)]
/// );
/// ```
#[must_use]
pub fn rasterize_line(p1: Point, p2: Point) -> Vec<Point> {
    let dx = (i64::from(p2.x) - i64::from(p1.x)).abs();
    let dy = (i64::from(p2.y) - i64::from(p1.y)).abs();

    let swapped = if dx >= dy { p2.x < p1.x } else { p2.y < p1.y };
    let (from, to) = if swapped { (p2, p1) } else { (p1, p2) };

    let mut pixels: Vec<Point> = Walk::new(from, to).collect();
    if swapped {
        pixels.reverse();
    }
    pixels
}

/// Lazy Bresenham walk from one endpoint to the other, both included.
#[derive(Debug, Clone)]
struct Walk {
    current: Point,
    step_major: (i32, i32),
    step_minor: (i32, i32),
    major: i64,
    minor: i64,
    decision: i64,
    remaining: u64,
}

impl Walk {
    fn new(from: Point, to: Point) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };

        // x-major for |m| <= 1, y-major otherwise.
        let (major, minor, step_major, step_minor) = if dx >= dy {
            (dx, dy, (sx, 0), (0, sy))
        } else {
            (dy, dx, (0, sy), (sx, 0))
        };

        Self {
            current: from,
            step_major,
            step_minor,
            major,
            minor,
            decision: 2 * minor - major,
            remaining: major.unsigned_abs() + 1,
        }
    }
}

impl Iterator for Walk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let pixel = self.current;
        self.remaining -= 1;

        // Only step while pixels remain; the last one lands exactly on `to`,
        // so `current` never leaves the span between the endpoints.
        if self.remaining > 0 {
            let mut next = self.current;
            if self.decision < 0 {
                self.decision += 2 * self.minor;
            } else {
                self.decision += 2 * (self.minor - self.major);
                next = Point::new(next.x + self.step_minor.0, next.y + self.step_minor.1);
            }
            self.current = Point::new(next.x + self.step_major.0, next.y + self.step_major.1);
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
