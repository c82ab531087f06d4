//! Midpoint circle rasterization.

use crate::geometry::Point;
use std::collections::HashSet;

/// Rasterize the boundary of a circle with the midpoint algorithm.
///
/// One octant is walked from `(0, r)` with decision parameter `p = 1 - r`;
/// every step plots its eight reflections about the axes and diagonals,
/// offset by `center`. Reflections that coincide (on the axes, on the
/// diagonal, or between the final two steps) are emitted once, in
/// first-visit order, so radius 0 yields just `[center]`. Reflections that
/// fall outside the `i32` coordinate range are omitted.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::raster::rasterize_circle;
///
/// let pixels = rasterize_circle(Point::new(0, 0), 5);
/// assert!(pixels.contains(&Point::new(3, 4)));
/// assert!(pixels.contains(&Point::new(-5, 0)));
/// ```
#[must_use]
pub fn rasterize_circle(center: Point, radius: u32) -> Vec<Point> {
    let mut seen = HashSet::new();
    let mut pixels = Vec::new();
    plot_circle(center, radius, |p| {
        if seen.insert(p) {
            pixels.push(p);
        }
    });
    pixels
}

/// Rasterize a ring of the given thickness as concentric midpoint circles.
///
/// Passes use radii `radius - thickness / 2 + t` for `t in 0..thickness`;
/// passes whose radius is not positive are skipped. Thickness 0 yields an
/// empty ring.
#[must_use]
pub fn rasterize_ring(center: Point, radius: u32, thickness: u32) -> Vec<Point> {
    let radius = i64::from(radius);
    let thickness = i64::from(thickness);
    let mut seen = HashSet::new();
    let mut pixels = Vec::new();

    for t in 0..thickness {
        let effective = radius - thickness / 2 + t;
        let Ok(effective) = u32::try_from(effective) else {
            log::debug!("ring pass {t} skipped: radius {effective} out of range");
            continue;
        };
        if effective == 0 {
            log::debug!("ring pass {t} skipped: zero radius");
            continue;
        }
        plot_circle(center, effective, |p| {
            if seen.insert(p) {
                pixels.push(p);
            }
        });
    }
    pixels
}

/// Walk one octant and plot all eight reflections of every step.
///
/// Reflections that fall outside the `i32` coordinate range are dropped.
fn plot_circle(center: Point, radius: u32, mut plot: impl FnMut(Point)) {
    if radius == 0 {
        log::debug!("zero-radius circle at {center:?}");
    }

    for (x, y) in Octant::new(radius) {
        for (dx, dy) in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
            if let Some(p) = center.checked_offset(dx, dy) {
                plot(p);
            }
        }
    }
}

/// Midpoint walk of the octant from `(0, r)` to the diagonal.
///
/// State is `i64` so every `u32` radius is walked without truncation.
#[derive(Debug, Clone)]
struct Octant {
    x: i64,
    y: i64,
    decision: i64,
    done: bool,
}

impl Octant {
    fn new(radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            x: 0,
            y: r,
            decision: 1 - r,
            done: false,
        }
    }
}

impl Iterator for Octant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.done {
            return None;
        }
        let step = (self.x, self.y);

        if self.x < self.y {
            self.x += 1;
            if self.decision < 0 {
                self.decision += 2 * self.x + 1;
            } else {
                self.y -= 1;
                self.decision += 2 * (self.x - self.y) + 1;
            }
        } else {
            self.done = true;
        }
        Some(step)
    }
}
