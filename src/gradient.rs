//! Hue-ramp colorizer for shading successive shapes.
//!
//! Index `i` of `count` maps to hue `i / count * max_degrees` at full
//! saturation and value. Dividing by `count` (not `count - 1`) keeps the last
//! index strictly below `max_degrees`, and `max_degrees < 360` keeps the ramp
//! from returning to red.

use crate::color::{Color, Hsv};
use crate::config::{KernelConfig, DEFAULT_HUE_MAX_DEGREES};
use crate::error::{Error, Result};

/// A bounded sweep of the HSV hue angle starting at 0 degrees (red).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRamp {
    max_degrees: f32,
}

impl Default for HueRamp {
    fn default() -> Self {
        Self {
            max_degrees: DEFAULT_HUE_MAX_DEGREES,
        }
    }
}

impl HueRamp {
    /// Create a ramp ending at `max_degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] unless `0 < max_degrees < 360`.
    pub fn new(max_degrees: f32) -> Result<Self> {
        KernelConfig::new().with_hue_max_degrees(max_degrees).validate()?;
        Ok(Self { max_degrees })
    }

    /// Ramp described by a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if the configured end is out of range.
    pub fn from_config(config: &KernelConfig) -> Result<Self> {
        Self::new(config.hue_max_degrees)
    }

    /// End of the ramp in degrees.
    #[must_use]
    pub const fn max_degrees(&self) -> f32 {
        self.max_degrees
    }

    /// Hue angle for `index` of `count`, in `[0, max_degrees)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGradientIndex`] if `count == 0` or
    /// `index >= count`.
    pub fn hue_for_index(&self, index: usize, count: usize) -> Result<f32> {
        if index >= count {
            return Err(Error::InvalidGradientIndex { index, count });
        }
        Ok(self.hue_at(index, count))
    }

    /// Hue for an index already known to be in `0..count`.
    fn hue_at(&self, index: usize, count: usize) -> f32 {
        index as f32 / count as f32 * self.max_degrees
    }

    /// Color for `index` of `count`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGradientIndex`] if `count == 0` or
    /// `index >= count`.
    pub fn color_for_index(&self, index: usize, count: usize) -> Result<Color> {
        let hue = self.hue_for_index(index, count)?;
        Ok(Hsv::vivid(hue).to_color())
    }

    /// Colors for every index in `0..count`.
    pub fn colors(&self, count: usize) -> impl Iterator<Item = Color> + '_ {
        (0..count).map(move |i| Hsv::vivid(self.hue_at(i, count)).to_color())
    }
}

/// Color for `index` of `count` on the default 270-degree ramp.
///
/// # Errors
///
/// Returns [`Error::InvalidGradientIndex`] if `count == 0` or `index >= count`.
pub fn color_for_index(index: usize, count: usize) -> Result<Color> {
    HueRamp::default().color_for_index(index, count)
}
