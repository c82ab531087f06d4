//! # Trueno-Raster
//!
//! Pure-Rust raster graphics kernel: integer line and circle rasterization,
//! thick lines, Liang-Barsky clipping and hue-ramp shading, with a small
//! framebuffer and PNG encoder for looking at the result.
//!
//! ## Features
//!
//! - **Pure functions**: every kernel takes explicit geometry and returns pixels or a result
//! - **Integer rasterizers**: Bresenham lines and midpoint circles, 8-connected, no floats
//! - **Clipping**: Liang-Barsky against axis-aligned windows with a configurable parallel tolerance
//! - **Scenes**: immutable line, ring and clip scenes rendered to a framebuffer or PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = rasterize_line(Point::new(0, 0), Point::new(5, 2));
//! assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
//! assert_eq!(pixels.last(), Some(&Point::new(5, 2)));
//!
//! let window = ClipWindow::new(-50.0, -50.0, 50.0, 50.0)?;
//! let result = clip(Segment::from_coords(-100.0, 0.0, 100.0, 0.0), &window);
//! assert!(!result.is_rejected());
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2), 100-106.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and HSV conversion.
pub mod color;

/// Kernel tuning parameters.
pub mod config;

/// Geometric primitives (points, segments, circles, windows, polygons).
pub mod geometry;

/// Hue-ramp shading for indexed primitives.
pub mod gradient;

// ============================================================================
// Kernel Modules
// ============================================================================

/// Line, thick-line and circle rasterization.
pub mod raster;

/// Liang-Barsky segment clipping.
pub mod clip;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Drawing kernel output into a framebuffer.
pub mod render;

/// Output encoders (PNG).
pub mod output;

/// Immutable demonstration scenes.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip, clip_with, ClipResult, ClippedSegment};
    pub use crate::color::{Color, Hsv, Rgba};
    pub use crate::config::KernelConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, ClipWindow, Point, PointF, Polygon, Segment};
    pub use crate::gradient::{color_for_index, HueRamp};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        rasterize_circle, rasterize_line, rasterize_ring, rasterize_thick_line,
        thick_line_outline, thick_line_outline_with,
    };
    pub use crate::render::Drawable;
    pub use crate::scene::{ClipScene, LineMode, LineScene, Ring, RingScene};
}

// ============================================================================
// Tests
// ============================================================================
