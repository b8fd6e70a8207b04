//! Color mode types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Default heatmap gain.
pub const DEFAULT_INTENSITY_SCALE: f64 = 1.0;

/// How decoded samples become output colors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorMode {
    /// Channel values are written as-is
    #[default]
    Direct,
    /// Sample intensity is mapped through the heatmap gradient.
    /// Construct with [`ColorMode::false_color`] so the scale is checked.
    FalseColor { intensity_scale: f64 },
}

impl ColorMode {
    pub fn false_color(intensity_scale: f64) -> Result<Self> {
        if !intensity_scale.is_finite() || intensity_scale <= 0.0 {
            return Err(ConversionError::InvalidIntensityScale(intensity_scale));
        }
        Ok(ColorMode::FalseColor { intensity_scale })
    }
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
