//! Immutable scene descriptions and their rendering.
//!
//! A scene is a plain value holding everything a redraw needs; rendering
//! borrows it and writes into a caller-owned [`Framebuffer`]. Nothing here
//! keeps state between calls.

use crate::clip::{clip_with, ClipResult};
use crate::color::{Color, Rgba};
use crate::config::KernelConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipWindow, Point, PointF, Segment};
use crate::gradient::HueRamp;
use crate::render::{
    draw_line, draw_ring, draw_thick_line, draw_thick_line_pixels, draw_window, Drawable,
};

/// Fill a `size` x `size` square marker centred on `center`.
fn draw_marker(fb: &mut Framebuffer, center: Point, size: i64, color: Rgba) {
    for dy in -((size - 1) / 2)..=size / 2 {
        for dx in -((size - 1) / 2)..=size / 2 {
            if let Some(p) = center.checked_offset(dx, dy) {
                fb.set_world_pixel(p, color);
            }
        }
    }
}

// ============================================================================
// Single line
// ============================================================================

/// How a [`LineScene`] draws its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// One-pixel Bresenham line.
    Standard,
    /// Filled rectangle outline of the given width.
    Thick {
        /// Line width in pixels.
        width: u32,
    },
}

/// One line between two points, drawn over the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScene {
    /// Start point.
    pub p1: Point,
    /// End point.
    pub p2: Point,
    /// Drawing mode.
    pub mode: LineMode,
}

impl LineScene {
    /// Standard-mode scene.
    #[must_use]
    pub const fn standard(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            mode: LineMode::Standard,
        }
    }

    /// Thick-mode scene.
    #[must_use]
    pub const fn thick(p1: Point, p2: Point, width: u32) -> Self {
        Self {
            p1,
            p2,
            mode: LineMode::Thick { width },
        }
    }

    /// Caption describing the scene.
    #[must_use]
    pub fn label(&self) -> String {
        let (p1, p2) = (self.p1, self.p2);
        match self.mode {
            LineMode::Standard => format!(
                "Mode A: Standard Bresenham Line from ({},{}) to ({},{})",
                p1.x, p1.y, p2.x, p2.y
            ),
            LineMode::Thick { width } => format!(
                "Mode B: Thick Line (W={width}) from ({},{}) to ({},{})",
                p1.x, p1.y, p2.x, p2.y
            ),
        }
    }

    /// Render onto a cleared black background.
    ///
    /// # Errors
    ///
    /// Returns an error if a thick line has zero width.
    pub fn render(&self, fb: &mut Framebuffer, config: &KernelConfig) -> Result<()> {
        log::debug!("rendering line scene: {}", self.label());
        fb.clear(Rgba::BLACK);
        fb.draw_axes(Rgba::GREEN);

        match self.mode {
            LineMode::Standard => draw_line(fb, self.p1, self.p2, Rgba::GREEN),
            LineMode::Thick { width } => draw_thick_line(
                fb,
                self.p1,
                self.p2,
                width,
                config,
                Color::YELLOW.to_rgba(),
            )?,
        }

        draw_marker(fb, self.p1, 5, Rgba::RED);
        draw_marker(fb, self.p2, 5, Rgba::RED);
        Ok(())
    }
}

// ============================================================================
// Concentric rings
// ============================================================================

/// One ring of a [`RingScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Nominal radius.
    pub radius: u32,
    /// Number of concentric one-pixel passes.
    pub thickness: u32,
    /// Shade from the hue ramp.
    pub color: Color,
}

/// Concentric rings of growing radius and thickness shaded along a hue ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingScene {
    /// Shared centre.
    pub center: Point,
    /// Number of rings.
    pub count: usize,
    /// Radius of ring 0.
    pub min_radius: u32,
    /// Radius increase per ring.
    pub radius_step: u32,
    /// Thickness increase per ring; ring 0 is one pixel thick.
    pub thickness_step: u32,
}

impl Default for RingScene {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            count: 15,
            min_radius: 10,
            radius_step: 12,
            thickness_step: 1,
        }
    }
}

impl RingScene {
    /// Radii, thicknesses and colors of every ring, innermost first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hue ramp is invalid.
    pub fn rings(&self, config: &KernelConfig) -> Result<Vec<Ring>> {
        let ramp = HueRamp::from_config(config)?;
        (0..self.count)
            .map(|i| {
                let i_u32 = u32::try_from(i).unwrap_or(u32::MAX);
                Ok(Ring {
                    radius: self
                        .min_radius
                        .saturating_add(i_u32.saturating_mul(self.radius_step)),
                    thickness: 1 + i_u32.saturating_mul(self.thickness_step),
                    color: ramp.color_for_index(i, self.count)?,
                })
            })
            .collect()
    }

    /// Render onto a cleared black background.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hue ramp is invalid.
    pub fn render(&self, fb: &mut Framebuffer, config: &KernelConfig) -> Result<()> {
        let rings = self.rings(config)?;
        log::debug!("rendering {} rings", rings.len());

        fb.clear(Rgba::BLACK);
        fb.draw_axes(Color::new(0.3, 0.3, 0.3).to_rgba());
        for ring in &rings {
            draw_ring(fb, self.center, ring.radius, ring.thickness, ring.color.to_rgba());
        }
        Ok(())
    }
}

// ============================================================================
// Clipping
// ============================================================================

/// Segments clipped against one window.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipScene {
    window: ClipWindow,
    segments: Vec<Segment>,
}

impl ClipScene {
    /// Build a scene from raw window bounds, swapping inverted bounds.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64, segments: Vec<Segment>) -> Self {
        let window = ClipWindow::from_corners(PointF::new(xmin, ymin), PointF::new(xmax, ymax));
        Self { window, segments }
    }

    /// Build a scene from an existing window.
    #[must_use]
    pub fn with_window(window: ClipWindow, segments: Vec<Segment>) -> Self {
        Self { window, segments }
    }

    /// The (normalized) clip window.
    #[must_use]
    pub const fn window(&self) -> &ClipWindow {
        &self.window
    }

    /// The unclipped input segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Clip result for every segment, in input order.
    #[must_use]
    pub fn results(&self, config: &KernelConfig) -> Vec<ClipResult> {
        self.segments
            .iter()
            .map(|&segment| clip_with(segment, &self.window, config))
            .collect()
    }

    /// Entry and exit points of every visible part, flattened in input order.
    #[must_use]
    pub fn visible_points(&self, config: &KernelConfig) -> Vec<PointF> {
        self.results(config)
            .iter()
            .filter_map(ClipResult::endpoints)
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    /// Render onto a cleared white background.
    pub fn render(&self, fb: &mut Framebuffer, config: &KernelConfig) {
        let results = self.results(config);
        log::debug!(
            "rendering clip scene: {} of {} segments visible",
            results.iter().filter(|r| !r.is_rejected()).count(),
            results.len()
        );

        fb.clear(Rgba::WHITE);
        fb.draw_axes(Color::new(0.0, 0.7, 0.0).to_rgba());
        draw_window(fb, &self.window, Color::new(0.0, 0.0, 0.8).to_rgba());

        let unclipped = Color::new(0.9, 0.3, 0.3).to_rgba();
        let clipped = Color::new(1.0, 0.6, 0.0).to_rgba();
        let marker = Color::new(0.5, 0.0, 0.8).to_rgba();

        for (segment, result) in self.segments.iter().zip(&results) {
            segment.draw(fb, unclipped);

            if let Some((a, b)) = result.endpoints() {
                if let Err(e) = draw_thick_line_pixels(fb, a.round(), b.round(), 4, clipped) {
                    log::debug!("clipped part of {segment:?} not drawn: {e}");
                }
                draw_marker(fb, a.round(), 8, marker);
                draw_marker(fb, b.round(), 8, marker);
            }
        }
    }
}
