//! Error types for trueno-raster operations.
//!
//! Degenerate geometry (zero-length lines, zero radii, segments parallel to a
//! clip edge) is never an error; it is handled by explicit fallback branches.
//! The variants below cover caller programming errors, configuration problems
//! and the I/O of the optional PNG sink.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Gradient lookup outside `0 <= index < count`.
    #[error("Invalid gradient index {index} for count {count}")]
    InvalidGradientIndex {
        /// Requested index.
        index: usize,
        /// Number of gradient steps.
        count: usize,
    },

    /// Thick line requested with zero width.
    #[error("Thick line width must be at least 1")]
    ZeroWidth,

    /// Pixel thick line wider than the `i32` offset range, or too large to allocate.
    #[error("Thick line width {width} is too large to rasterize")]
    WidthTooLarge {
        /// Requested width.
        width: u32,
    },

    /// Clip window whose minimum exceeds its maximum on some axis.
    #[error("Invalid clip window: ({xmin}, {ymin}) -> ({xmax}, {ymax})")]
    InvalidWindow {
        /// Left edge.
        xmin: f64,
        /// Bottom edge.
        ymin: f64,
        /// Right edge.
        xmax: f64,
        /// Top edge.
        ymax: f64,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Why the value is invalid.
        message: String,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Parser message.
        message: String,
    },
}
