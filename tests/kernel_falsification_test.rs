//! Kernel Falsification Tests
//!
//! Each test is a falsifiable claim about the rasterization, clipping and
//! shading kernels, checked on fixed scenarios and with proptest.
//!
//! Run: cargo test --test kernel_falsification_test

#![allow(clippy::unwrap_used, clippy::cast_possible_wrap)]

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use trueno_raster::prelude::*;

fn coord() -> impl Strategy<Value = i32> {
    -300..=300_i32
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn window() -> ClipWindow {
    ClipWindow::new(-50.0, -50.0, 50.0, 50.0).unwrap()
}

// ============================================================================
// LINES
// ============================================================================

/// Claim 1: The documented steep line from (-50, 100) to (100, -250) has
/// one pixel per unit of y.
#[test]
fn claim_01_steep_line_one_pixel_per_row() {
    let pixels = rasterize_line(Point::new(-50, 100), Point::new(100, -250));
    assert_eq!(pixels.len(), 351);
    assert_eq!(pixels[0], Point::new(-50, 100));
    assert_eq!(pixels[350], Point::new(100, -250));

    let rows: HashSet<i32> = pixels.iter().map(|p| p.y).collect();
    assert_eq!(rows.len(), 351);
}

/// Claim 2: Horizontal and vertical lines are straight runs.
#[test]
fn claim_02_axis_aligned_lines() {
    let h = rasterize_line(Point::new(-3, 7), Point::new(3, 7));
    assert_eq!(h, (-3..=3).map(|x| Point::new(x, 7)).collect::<Vec<_>>());

    let v = rasterize_line(Point::new(2, 4), Point::new(2, -1));
    assert_eq!(v, (-1..=4).rev().map(|y| Point::new(2, y)).collect::<Vec<_>>());
}

proptest! {
    /// Claim 3: Lines start at p1, end at p2 and contain max(|dx|, |dy|) + 1 pixels.
    #[test]
    fn claim_03_line_endpoints_and_length(p1 in point(), p2 in point()) {
        let pixels = rasterize_line(p1, p2);
        let expected = (p2.x - p1.x).abs().max((p2.y - p1.y).abs()) as usize + 1;

        prop_assert_eq!(pixels.len(), expected);
        prop_assert_eq!(pixels.first(), Some(&p1));
        prop_assert_eq!(pixels.last(), Some(&p2));
    }

    /// Claim 4: Consecutive pixels are 8-connected and never repeat.
    #[test]
    fn claim_04_line_is_eight_connected(p1 in point(), p2 in point()) {
        let pixels = rasterize_line(p1, p2);
        for pair in pixels.windows(2) {
            prop_assert_eq!(pair[0].chebyshev_distance(pair[1]), 1);
        }
    }

    /// Claim 5: Swapping endpoints reverses the pixel sequence.
    #[test]
    fn claim_05_line_swap_symmetric(p1 in point(), p2 in point()) {
        let mut backward = rasterize_line(p2, p1);
        backward.reverse();
        prop_assert_eq!(rasterize_line(p1, p2), backward);
    }

    /// Claim 6: Every pixel lies within half a pixel of the ideal line along
    /// the minor axis.
    #[test]
    fn claim_06_line_stays_near_ideal(p1 in point(), p2 in point()) {
        prop_assume!(p1 != p2);
        let dx = f64::from(p2.x - p1.x);
        let dy = f64::from(p2.y - p1.y);

        for p in rasterize_line(p1, p2) {
            let error = if dx.abs() >= dy.abs() {
                let ideal = f64::from(p1.y) + dy * f64::from(p.x - p1.x) / dx;
                (f64::from(p.y) - ideal).abs()
            } else {
                let ideal = f64::from(p1.x) + dx * f64::from(p.y - p1.y) / dy;
                (f64::from(p.x) - ideal).abs()
            };
            prop_assert!(error <= 0.5 + 1e-9, "pixel {:?} off by {}", p, error);
        }
    }
}

// ============================================================================
// THICK LINES
// ============================================================================

/// Claim 7: A horizontal thick line's outline is a w/2 offset rectangle.
#[test]
fn claim_07_thick_outline_rectangle() {
    let outline = thick_line_outline(Point::new(-100, 100), Point::new(100, 100), 20).unwrap();
    let v = outline.vertices();
    assert_eq!(v.len(), 4);

    let ys: Vec<f64> = v.iter().map(|p| p.y).collect();
    for y in ys {
        assert_abs_diff_eq!((y - 100.0).abs(), 10.0, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(outline.area(), 200.0 * 20.0, epsilon = 1e-6);
}

/// Claim 8: A zero-length thick line falls back to a square at p1.
#[test]
fn claim_08_thick_degenerate_square() {
    let outline = thick_line_outline(Point::new(5, 5), Point::new(5, 5), 6).unwrap();
    assert_abs_diff_eq!(outline.area(), 36.0, epsilon = 1e-9);
    assert!(matches!(
        thick_line_outline(Point::ORIGIN, Point::new(1, 1), 0),
        Err(Error::ZeroWidth)
    ));
}

proptest! {
    /// Claim 9: Outline area equals length times width for non-degenerate lines.
    #[test]
    fn claim_09_thick_outline_area(p1 in point(), p2 in point(), width in 1_u32..40) {
        let len = p1.distance(p2);
        prop_assume!(len >= 1.0);
        let outline = thick_line_outline(p1, p2, width).unwrap();
        let expected = len * f64::from(width);
        prop_assert!((outline.area() - expected).abs() < 1e-6 * expected.max(1.0));
    }

    /// Claim 10: Pixel thick lines contain the one-pixel line and scale with width.
    #[test]
    fn claim_10_thick_pixels_cover_centerline(p1 in point(), p2 in point(), width in 1_u32..8) {
        let thick: HashSet<Point> = rasterize_thick_line(p1, p2, width).unwrap().into_iter().collect();
        for p in rasterize_line(p1, p2) {
            prop_assert!(thick.contains(&p));
        }
        let steps = (p2.x - p1.x).abs().max((p2.y - p1.y).abs()) as usize + 1;
        prop_assert_eq!(thick.len(), steps * width as usize);
    }
}

// ============================================================================
// CIRCLES
// ============================================================================

/// Claim 11: Radius 0 yields just the centre.
#[test]
fn claim_11_circle_radius_zero() {
    assert_eq!(rasterize_circle(Point::new(3, -4), 0), vec![Point::new(3, -4)]);
}

/// Claim 12: The outermost default ring spans radii 171 to 185.
#[test]
fn claim_12_thick_ring_extent() {
    let pixels = rasterize_ring(Point::ORIGIN, 178, 15);
    let tops: HashSet<i32> = pixels.iter().filter(|p| p.x == 0 && p.y > 0).map(|p| p.y).collect();
    assert_eq!(tops, (171..=185).collect());
}

proptest! {
    /// Claim 13: Circle pixels lie within one pixel of the nominal radius.
    #[test]
    fn claim_13_circle_distance(center in point(), radius in 0_u32..200) {
        let r = f64::from(radius);
        for p in rasterize_circle(center, radius) {
            let d = center.distance(p);
            prop_assert!(d >= r - 1.0 && d <= r + 1.0, "{:?} at distance {}", p, d);
        }
    }

    /// Claim 14: Circle pixel sets have 8-fold symmetry and no duplicates.
    #[test]
    fn claim_14_circle_symmetry(center in point(), radius in 0_u32..200) {
        let pixels = rasterize_circle(center, radius);
        let set: HashSet<Point> = pixels.iter().copied().collect();
        prop_assert_eq!(set.len(), pixels.len());

        for p in &pixels {
            let (dx, dy) = (p.x - center.x, p.y - center.y);
            for (x, y) in [(dx, dy), (-dx, dy), (dx, -dy), (-dx, -dy),
                           (dy, dx), (-dy, dx), (dy, -dx), (-dy, -dx)] {
                prop_assert!(set.contains(&center.offset(x, y)));
            }
        }
    }
}

// ============================================================================
// CLIPPING
// ============================================================================

/// Claim 15: The horizontal crossing clips to t = 0.25..0.75.
#[test]
fn claim_15_horizontal_crossing() {
    let visible = *clip(Segment::from_coords(-100.0, 0.0, 100.0, 0.0), &window())
        .visible()
        .unwrap();
    assert_abs_diff_eq!(visible.t0, 0.25);
    assert_abs_diff_eq!(visible.t1, 0.75);
    assert_abs_diff_eq!(visible.segment.p1.x, -50.0);
    assert_abs_diff_eq!(visible.segment.p2.x, 50.0);
}

fn coord_f() -> impl Strategy<Value = f64> {
    -200.0..200.0_f64
}

fn segment() -> impl Strategy<Value = Segment> {
    (coord_f(), coord_f(), coord_f(), coord_f())
        .prop_map(|(x1, y1, x2, y2)| Segment::from_coords(x1, y1, x2, y2))
}

proptest! {
    /// Claim 16: Segments fully inside are returned unchanged.
    #[test]
    fn claim_16_inside_unchanged(
        x1 in -50.0..=50.0_f64, y1 in -50.0..=50.0_f64,
        x2 in -50.0..=50.0_f64, y2 in -50.0..=50.0_f64,
    ) {
        let seg = Segment::from_coords(x1, y1, x2, y2);
        let visible = *clip(seg, &window()).visible().unwrap();
        prop_assert_eq!(visible.segment, seg);
    }

    /// Claim 17: Segments entirely beyond one edge are rejected.
    #[test]
    fn claim_17_outside_rejected(seg in segment(), shift in 51.0..300.0_f64) {
        let left = Segment::from_coords(
            -shift - seg.p1.x.abs(), seg.p1.y, -shift - seg.p2.x.abs(), seg.p2.y,
        );
        prop_assert!(clip(left, &window()).is_rejected());
    }

    /// Claim 18: Visible parts stay inside the window and clipping is idempotent.
    #[test]
    fn claim_18_visible_inside_and_idempotent(seg in segment()) {
        let w = window();
        if let Some(first) = clip(seg, &w).visible().copied() {
            prop_assert!(first.t0 <= first.t1);
            for p in [first.segment.p1, first.segment.p2] {
                prop_assert!(p.x >= -50.0 - 1e-9 && p.x <= 50.0 + 1e-9);
                prop_assert!(p.y >= -50.0 - 1e-9 && p.y <= 50.0 + 1e-9);
            }

            // Slivers shorter than the parallel tolerance may round to outside.
            if first.segment.length() > 1e-3 {
                let second = *clip(first.segment, &w).visible().unwrap();
                prop_assert!(second.segment.p1.distance(first.segment.p1) < 1e-9);
                prop_assert!(second.segment.p2.distance(first.segment.p2) < 1e-9);
            }
        }
    }
}

// ============================================================================
// GRADIENT
// ============================================================================

/// Claim 19: The ramp starts red and never reaches back to red.
#[test]
fn claim_19_hue_ramp_endpoints() {
    assert_eq!(color_for_index(0, 15).unwrap(), Color::RED);
    let last = HueRamp::default().hue_for_index(14, 15).unwrap();
    assert_abs_diff_eq!(last, 252.0, epsilon = 1e-4);
    assert!(matches!(
        color_for_index(15, 15),
        Err(Error::InvalidGradientIndex { index: 15, count: 15 })
    ));
}

proptest! {
    /// Claim 20: Hue increases with index and colors stay in [0, 1].
    #[test]
    fn claim_20_hue_monotonic(count in 1_usize..200) {
        let ramp = HueRamp::default();
        let mut previous = -1.0_f32;
        for i in 0..count {
            let hue = ramp.hue_for_index(i, count).unwrap();
            prop_assert!(hue > previous);
            prop_assert!(hue < 270.0);
            previous = hue;

            let c = ramp.color_for_index(i, count).unwrap();
            for channel in [c.r, c.g, c.b] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
