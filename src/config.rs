//! Kernel tuning parameters.
//!
//! The kernel is stateless; the only knobs are the numeric thresholds that
//! depend on the caller's coordinate scale. Values can be built in code or
//! loaded from YAML, with every field optional.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default parallel-edge tolerance for Liang-Barsky clipping.
pub const DEFAULT_CLIP_EPSILON: f64 = 1e-6;

/// Default segment length below which thick lines degenerate to a square.
pub const DEFAULT_MIN_THICK_LENGTH: f64 = 1.0;

/// Default end of the hue ramp, in degrees.
pub const DEFAULT_HUE_MAX_DEGREES: f32 = 270.0;

/// Numeric thresholds used by the rasterizers, the clipper and the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// `|p|` below this means the segment is parallel to a clip edge.
    #[serde(default = "default_clip_epsilon")]
    pub clip_epsilon: f64,

    /// Segments shorter than this get a square instead of a rotated outline.
    #[serde(default = "default_min_thick_length")]
    pub min_thick_length: f64,

    /// Hue reached (exclusive) by the last gradient index.
    #[serde(default = "default_hue_max_degrees")]
    pub hue_max_degrees: f32,
}

fn default_clip_epsilon() -> f64 {
    DEFAULT_CLIP_EPSILON
}
fn default_min_thick_length() -> f64 {
    DEFAULT_MIN_THICK_LENGTH
}
fn default_hue_max_degrees() -> f32 {
    DEFAULT_HUE_MAX_DEGREES
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            clip_epsilon: default_clip_epsilon(),
            min_thick_length: default_min_thick_length(),
            hue_max_degrees: default_hue_max_degrees(),
        }
    }
}

impl KernelConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clipping tolerance.
    #[must_use]
    pub fn with_clip_epsilon(mut self, epsilon: f64) -> Self {
        self.clip_epsilon = epsilon;
        self
    }

    /// Set the thick-line degeneracy threshold.
    #[must_use]
    pub fn with_min_thick_length(mut self, length: f64) -> Self {
        self.min_thick_length = length;
        self
    }

    /// Set the end of the hue ramp.
    #[must_use]
    pub fn with_hue_max_degrees(mut self, degrees: f32) -> Self {
        self.hue_max_degrees = degrees;
        self
    }

    /// Check every field against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.clip_epsilon.is_finite() && self.clip_epsilon > 0.0) {
            return Err(Error::ConfigInvalid {
                key: "clip_epsilon",
                message: format!("must be finite and positive, got {}", self.clip_epsilon),
            });
        }
        if !self.min_thick_length.is_finite() || self.min_thick_length < 0.0 {
            return Err(Error::ConfigInvalid {
                key: "min_thick_length",
                message: format!(
                    "must be finite and non-negative, got {}",
                    self.min_thick_length
                ),
            });
        }
        if !(self.hue_max_degrees > 0.0 && self.hue_max_degrees < 360.0) {
            return Err(Error::ConfigInvalid {
                key: "hue_max_degrees",
                message: format!("must be in (0, 360), got {}", self.hue_max_degrees),
            });
        }
        Ok(())
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default kernel config: {e}");
            Self::default()
        })
    }
}
