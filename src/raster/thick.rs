//! Thick lines.
//!
//! Two renditions are offered:
//!
//! - [`thick_line_outline`] returns the vector rectangle whose medial axis is
//!   the segment. It is an approximation meant to be filled by the caller
//!   (see [`Framebuffer::fill_polygon`](crate::framebuffer::Framebuffer::fill_polygon)),
//!   not a pixel set.
//! - [`rasterize_thick_line`] is pixel-exact: `width` Bresenham passes,
//!   translated along the minor axis.

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, PointF, Polygon};

/// Rectangle outline of a `width`-wide line, using the default thresholds.
///
/// # Errors
///
/// Returns [`Error::ZeroWidth`] if `width == 0`.
pub fn thick_line_outline(p1: Point, p2: Point, width: u32) -> Result<Polygon> {
    thick_line_outline_with(p1, p2, width, &KernelConfig::default())
}

/// Rectangle outline of a `width`-wide line.
///
/// With unit normal `n = (-dy, dx) / len` and `h = width / 2` the corners are
/// `p1 - h·n`, `p1 + h·n`, `p2 + h·n`, `p2 - h·n`, in that order. When
/// `len < config.min_thick_length` the normal is unreliable and the outline
/// is instead an axis-aligned square of side `width` centered on `p1`.
///
/// # Errors
///
/// Returns [`Error::ZeroWidth`] if `width == 0`.
pub fn thick_line_outline_with(
    p1: Point,
    p2: Point,
    width: u32,
    config: &KernelConfig,
) -> Result<Polygon> {
    if width == 0 {
        return Err(Error::ZeroWidth);
    }

    let half = f64::from(width) / 2.0;
    let a = PointF::from(p1);
    let b = PointF::from(p2);
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();

    if length < config.min_thick_length {
        log::debug!(
            "thick line {p1:?} -> {p2:?} shorter than {}, using square",
            config.min_thick_length
        );
        return Ok(Polygon::new(vec![
            PointF::new(a.x - half, a.y - half),
            PointF::new(a.x + half, a.y - half),
            PointF::new(a.x + half, a.y + half),
            PointF::new(a.x - half, a.y + half),
        ]));
    }

    let nx = -dy / length;
    let ny = dx / length;

    Ok(Polygon::new(vec![
        PointF::new(a.x - half * nx, a.y - half * ny),
        PointF::new(a.x + half * nx, a.y + half * ny),
        PointF::new(b.x + half * nx, b.y + half * ny),
        PointF::new(b.x - half * nx, b.y - half * ny),
    ]))
}

/// Largest width accepted by [`rasterize_thick_line`].
pub const MAX_PIXEL_WIDTH: u32 = i32::MAX as u32;

/// Pixel-exact thick line made of `width` parallel Bresenham lines.
///
/// Each pass is the standard line translated along the minor axis by an
/// offset in `-(width - 1) / 2 ..= width / 2`. Passes are disjoint, so no
/// pixel appears twice. Pixels translated outside the `i32` coordinate range
/// are omitted.
///
/// # Errors
///
/// Returns [`Error::ZeroWidth`] if `width == 0`, and
/// [`Error::WidthTooLarge`] if `width > MAX_PIXEL_WIDTH` or the pixel set
/// cannot be allocated.
pub fn rasterize_thick_line(p1: Point, p2: Point, width: u32) -> Result<Vec<Point>> {
    if width == 0 {
        return Err(Error::ZeroWidth);
    }
    if width > MAX_PIXEL_WIDTH {
        return Err(Error::WidthTooLarge { width });
    }

    let x_major = (i64::from(p2.x) - i64::from(p1.x)).abs()
        >= (i64::from(p2.y) - i64::from(p1.y)).abs();
    let base = super::rasterize_line(p1, p2);

    let mut pixels: Vec<Point> = Vec::new();
    base.len()
        .checked_mul(width as usize)
        .and_then(|total| pixels.try_reserve_exact(total).ok())
        .ok_or(Error::WidthTooLarge { width })?;

    let w = i64::from(width);
    for offset in -((w - 1) / 2)..=w / 2 {
        let (ox, oy) = if x_major { (0, offset) } else { (offset, 0) };
        pixels.extend(base.iter().filter_map(|p| p.checked_offset(ox, oy)));
    }
    Ok(pixels)
}
