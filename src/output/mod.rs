//! Output encoders for the framebuffer sink.

mod png_encoder;

pub use png_encoder::PngEncoder;
