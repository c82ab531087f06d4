//! Integer rasterization of lines and circles.
//!
//! Every function here is pure: it takes explicit geometry and returns the
//! pixels (or, for [`thick_line_outline`], a vector outline) without touching
//! any buffer.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer decision variable, one step per major-axis unit
//! - **Thick Line**: perpendicular-offset rectangle, or stacked Bresenham passes
//! - **Midpoint Circle**: one octant walked, eight reflections plotted
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;
mod thick;

pub use circle::{rasterize_circle, rasterize_ring};
pub use line::rasterize_line;
pub use thick::{
    rasterize_thick_line, thick_line_outline, thick_line_outline_with, MAX_PIXEL_WIDTH,
};
