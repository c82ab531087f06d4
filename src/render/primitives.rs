//! Primitive rendering functions.
//!
//! Each function rasterizes with the kernel and plots the result in world
//! coordinates; off-screen pixels are dropped by the framebuffer.
//!
//! Lines are first clipped to the buffer grown by one buffer size on every
//! side, so the pixel walk is bounded by the buffer rather than by the
//! segment. Segments that already fit keep their exact endpoints.

use crate::clip::{clip, ClipResult};
use crate::color::Rgba;
use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, ClipWindow, Point, Polygon, Segment};
use crate::raster::{
    rasterize_circle, rasterize_line, rasterize_ring, rasterize_thick_line,
    thick_line_outline_with,
};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Lines
// ============================================================================

/// The part of `p1 -> p2` worth walking, or `None` if it cannot reach the buffer.
fn visible_span(fb: &Framebuffer, p1: Point, p2: Point) -> Option<(Point, Point)> {
    let margin = fb.width().max(fb.height());
    match clip(Segment::from_pixels(p1, p2), &fb.world_bounds(margin)) {
        ClipResult::Rejected => None,
        ClipResult::Visible(c) if c.t0 <= 0.0 && c.t1 >= 1.0 => Some((p1, p2)),
        ClipResult::Visible(c) => Some((c.segment.p1.round(), c.segment.p2.round())),
    }
}

/// Draw a one-pixel Bresenham line.
pub fn draw_line(fb: &mut Framebuffer, p1: Point, p2: Point, color: Rgba) {
    if let Some((a, b)) = visible_span(fb, p1, p2) {
        fb.plot_points(&rasterize_line(a, b), color);
    }
}

/// Draw a pixel-exact thick line made of stacked Bresenham passes.
///
/// # Errors
///
/// Returns an error if `width` is zero or too large to rasterize.
pub fn draw_thick_line_pixels(
    fb: &mut Framebuffer,
    p1: Point,
    p2: Point,
    width: u32,
    color: Rgba,
) -> Result<()> {
    if width == 0 {
        return Err(Error::ZeroWidth);
    }
    if let Some((a, b)) = visible_span(fb, p1, p2) {
        fb.plot_points(&rasterize_thick_line(a, b, width)?, color);
    }
    Ok(())
}

/// Draw a thick line by filling its rectangle outline.
///
/// # Errors
///
/// Returns an error if `width` is zero.
pub fn draw_thick_line(
    fb: &mut Framebuffer,
    p1: Point,
    p2: Point,
    width: u32,
    config: &KernelConfig,
    color: Rgba,
) -> Result<()> {
    let outline = thick_line_outline_with(p1, p2, width, config)?;
    fb.fill_polygon(&outline, color);
    Ok(())
}

impl Drawable for Segment {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line(fb, self.p1.round(), self.p2.round(), color);
    }
}

impl Drawable for Polygon {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fb.fill_polygon(self, color);
    }
}

// ============================================================================
// Circles
// ============================================================================

/// Draw a midpoint circle outline.
pub fn draw_circle(fb: &mut Framebuffer, center: Point, radius: u32, color: Rgba) {
    fb.plot_points(&rasterize_circle(center, radius), color);
}

/// Draw a ring of the given thickness.
pub fn draw_ring(fb: &mut Framebuffer, center: Point, radius: u32, thickness: u32, color: Rgba) {
    fb.plot_points(&rasterize_ring(center, radius, thickness), color);
}

impl Drawable for Circle {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_circle(fb, self.center, self.radius, color);
    }
}

// ============================================================================
// Windows / point sets
// ============================================================================

/// Draw the outline of a clip window, corners rounded to pixels.
pub fn draw_window(fb: &mut Framebuffer, window: &ClipWindow, color: Rgba) {
    let corners = window.corners().map(|c| c.round());
    for i in 0..corners.len() {
        draw_line(fb, corners[i], corners[(i + 1) % corners.len()], color);
    }
}

impl Drawable for ClipWindow {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_window(fb, self, color);
    }
}

impl Drawable for [Point] {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fb.plot_points(self, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
