//! Drawing kernel output into a [`Framebuffer`](crate::framebuffer::Framebuffer).
//!
//! The rasterizers return pixel lists and outlines; this module is the thin
//! glue that plots them in world coordinates.

mod primitives;

pub use primitives::{
    draw_circle, draw_line, draw_ring, draw_thick_line, draw_thick_line_pixels, draw_window,
    Drawable,
};
