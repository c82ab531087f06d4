//! RGBA pixel buffer used as the rendering sink.
//!
//! The kernel itself never draws; this buffer is where scenes land when a
//! caller wants pixels on disk. Besides raw buffer coordinates (origin top
//! left, y down) it exposes a *world* coordinate system with the origin at
//! the buffer centre and y pointing up, matching a centred orthographic
//! projection.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point, PointF, Polygon};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA framebuffer in row-major order.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(500, 500).unwrap();
    /// assert_eq!(fb.width(), 500);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a buffer coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a buffer coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Map a world coordinate to a buffer coordinate, if it is on screen.
    #[must_use]
    pub fn world_to_buffer(&self, p: Point) -> Option<(u32, u32)> {
        let bx = i64::from(p.x) + i64::from(self.width / 2);
        let by = i64::from(self.height / 2) - i64::from(p.y);
        let x = u32::try_from(bx).ok()?;
        let y = u32::try_from(by).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// World-coordinate extent of the buffer, grown by `margin` pixels on
    /// every side.
    #[must_use]
    pub fn world_bounds(&self, margin: u32) -> ClipWindow {
        let half_w = f64::from(self.width / 2);
        let half_h = f64::from(self.height / 2);
        let m = f64::from(margin);
        ClipWindow::from_corners(
            PointF::new(-half_w - m, half_h - f64::from(self.height) + 1.0 - m),
            PointF::new(f64::from(self.width) - half_w - 1.0 + m, half_h + m),
        )
    }

    /// Get the color at a world coordinate.
    #[must_use]
    pub fn get_world_pixel(&self, p: Point) -> Option<Rgba> {
        let (x, y) = self.world_to_buffer(p)?;
        self.get_pixel(x, y)
    }

    /// Set the color at a world coordinate; off-screen points are ignored.
    pub fn set_world_pixel(&mut self, p: Point, color: Rgba) {
        if let Some((x, y)) = self.world_to_buffer(p) {
            self.set_pixel(x, y, color);
        }
    }

    /// Plot a sequence of world points.
    pub fn plot_points(&mut self, points: &[Point], color: Rgba) {
        for &p in points {
            self.set_world_pixel(p, color);
        }
    }

    /// Fill a polygon given in world coordinates.
    ///
    /// Scanline fill with the even-odd rule. A pixel is filled when its centre
    /// (an integer world coordinate) lies in the half-open span
    /// `[x_enter, x_exit)` of its row; rows use the same half-open rule on y,
    /// so shared edges are never filled twice.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: Rgba) {
        if polygon.len() < 3 {
            return;
        }

        let (min_y, max_y) = polygon
            .vertices()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.y), hi.max(v.y))
            });

        let half_w = i64::from(self.width / 2);
        let half_h = i64::from(self.height / 2);
        let world_left = -half_w;
        let world_right = i64::from(self.width) - half_w - 1;
        let world_top = half_h;
        let world_bottom = half_h - i64::from(self.height) + 1;

        let row_start = (min_y.ceil() as i64).max(world_bottom);
        let row_end = (max_y.ceil() as i64 - 1).min(world_top);

        let mut crossings = Vec::with_capacity(polygon.len());
        for row in row_start..=row_end {
            let y = row as f64;
            crossings.clear();
            for (a, b) in polygon.edges() {
                if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let x_start = (span[0].ceil() as i64).max(world_left);
                let x_end = (span[1].ceil() as i64 - 1).min(world_right);
                for x in x_start..=x_end {
                    self.set_world_pixel(Point::new(x as i32, row as i32), color);
                }
            }
        }
    }

    /// Draw the world x and y axes through the origin.
    pub fn draw_axes(&mut self, color: Rgba) {
        if let Some((ox, oy)) = self.world_to_buffer(Point::ORIGIN) {
            for x in 0..self.width {
                self.set_pixel(x, oy, color);
            }
            for y in 0..self.height {
                self.set_pixel(ox, y, color);
            }
        }
    }

    /// Count pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let target = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        self.pixels
            .chunks_exact(self.stride)
            .flat_map(|row| row[..row_bytes].chunks_exact(4))
            .filter(|px| *px == target)
            .count()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is useful for encoding to formats like PNG that expect
    /// tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointF;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_world_mapping_centered() {
        let fb = Framebuffer::new(500, 500).unwrap();
        assert_eq!(fb.world_to_buffer(Point::ORIGIN), Some((250, 250)));
        assert_eq!(fb.world_to_buffer(Point::new(-250, 250)), Some((0, 0)));
        assert_eq!(fb.world_to_buffer(Point::new(249, -249)), Some((499, 499)));
        assert_eq!(fb.world_to_buffer(Point::new(250, 0)), None);
        assert_eq!(fb.world_to_buffer(Point::new(0, -250)), None);
    }

    #[test]
    fn test_world_bounds_match_mapping() {
        let fb = Framebuffer::new(500, 300).unwrap();
        let exact = fb.world_bounds(0);
        assert_eq!(
            (exact.xmin(), exact.ymin(), exact.xmax(), exact.ymax()),
            (-250.0, -149.0, 249.0, 150.0)
        );
        for corner in exact.corners() {
            assert!(fb.world_to_buffer(corner.round()).is_some());
        }

        let grown = fb.world_bounds(10);
        assert_eq!((grown.xmin(), grown.ymax()), (-260.0, 160.0));
    }

    #[test]
    fn test_set_world_pixel_y_up() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.set_world_pixel(Point::new(3, 4), Rgba::GREEN);
        assert_eq!(fb.get_pixel(13, 6), Some(Rgba::GREEN));
        assert_eq!(fb.get_world_pixel(Point::new(3, 4)), Some(Rgba::GREEN));

        // Off-screen writes are ignored.
        fb.set_world_pixel(Point::new(1000, -1000), Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 1);
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        let square = Polygon::new(vec![
            PointF::new(-10.0, -10.0),
            PointF::new(10.0, -10.0),
            PointF::new(10.0, 10.0),
            PointF::new(-10.0, 10.0),
        ]);
        fb.fill_polygon(&square, Rgba::WHITE);

        assert_eq!(fb.count_color(Rgba::WHITE), 400);
        assert_eq!(fb.get_world_pixel(Point::new(-10, -10)), Some(Rgba::WHITE));
        assert_eq!(fb.get_world_pixel(Point::new(10, 0)), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_polygon_clamped_to_buffer() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let huge = Polygon::new(vec![
            PointF::new(-1e6, -1e6),
            PointF::new(1e6, -1e6),
            PointF::new(1e6, 1e6),
            PointF::new(-1e6, 1e6),
        ]);
        fb.fill_polygon(&huge, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }

    #[test]
    fn test_fill_degenerate_polygon_is_noop() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_polygon(&Polygon::new(vec![PointF::ORIGIN, PointF::new(3.0, 3.0)]), Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_draw_axes() {
        let mut fb = Framebuffer::new(11, 11).unwrap();
        fb.draw_axes(Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 21);
        assert_eq!(fb.get_world_pixel(Point::new(-5, 0)), Some(Rgba::GREEN));
        assert_eq!(fb.get_world_pixel(Point::new(0, 5)), Some(Rgba::GREEN));
    }

    #[test]
    fn test_compact_pixels_drop_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::WHITE);
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.iter().all(|&b| b == 255));
    }
}
