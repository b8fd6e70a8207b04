//! Per-render sample extraction strategy.
//!
//! The depth/channel pair is resolved into a [`SampleLayout`] once per render so
//! the pixel loop only does a single match on a `Copy` tag.

use crate::image_pipeline::raw::types::{BitDepth, ChannelCount, Encoding};

/// Full-scale value of a 16-bit sample.
const U16_FULL_SCALE: f64 = 65535.0;
/// Full-scale value of the 8-bit output range.
const U8_FULL_SCALE: f64 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLayout {
    Gray8,
    Gray16,
    Rgb8,
    Rgb16,
    Rgba8,
    Rgba16,
}

/// One decoded pixel on the 0..=255 scale, before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Gray(f64),
    Color([f64; 3]),
}

impl Sample {
    pub fn rgb(self) -> [f64; 3] {
        match self {
            Sample::Gray(v) => [v, v, v],
            Sample::Color(rgb) => rgb,
        }
    }

    /// Single intensity used by the heatmap: the value itself for gray,
    /// the unweighted channel mean otherwise.
    pub fn intensity(self) -> f64 {
        match self {
            Sample::Gray(v) => v,
            Sample::Color([r, g, b]) => (r + g + b) / 3.0,
        }
    }
}

impl SampleLayout {
    pub fn resolve(encoding: &Encoding) -> Self {
        match (encoding.bit_depth, encoding.channels) {
            (BitDepth::Eight, ChannelCount::Gray) => SampleLayout::Gray8,
            (BitDepth::Sixteen, ChannelCount::Gray) => SampleLayout::Gray16,
            (BitDepth::Eight, ChannelCount::Rgb) => SampleLayout::Rgb8,
            (BitDepth::Sixteen, ChannelCount::Rgb) => SampleLayout::Rgb16,
            (BitDepth::Eight, ChannelCount::Rgba) => SampleLayout::Rgba8,
            (BitDepth::Sixteen, ChannelCount::Rgba) => SampleLayout::Rgba16,
        }
    }

    /// Byte stride between consecutive pixels.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            SampleLayout::Gray8 => 1,
            SampleLayout::Gray16 => 2,
            SampleLayout::Rgb8 => 3,
            SampleLayout::Rgba8 => 4,
            SampleLayout::Rgb16 => 6,
            SampleLayout::Rgba16 => 8,
        }
    }

    /// Extracts one pixel. `px` must be exactly `bytes_per_pixel()` long.
    #[inline]
    pub fn sample(self, px: &[u8]) -> Sample {
        match self {
            SampleLayout::Gray8 => Sample::Gray(px[0] as f64),
            SampleLayout::Gray16 => Sample::Gray(rescale_u16(px[0], px[1])),
            SampleLayout::Rgb8 | SampleLayout::Rgba8 => {
                Sample::Color([px[0] as f64, px[1] as f64, px[2] as f64])
            }
            SampleLayout::Rgb16 | SampleLayout::Rgba16 => Sample::Color([
                rescale_u16(px[0], px[1]),
                rescale_u16(px[2], px[3]),
                rescale_u16(px[4], px[5]),
            ]),
        }
    }
}

/// Linear rescale of a little-endian 16-bit sample onto 0..=255.
#[inline]
pub fn rescale_u16(low: u8, high: u8) -> f64 {
    u16::from_le_bytes([low, high]) as f64 * U8_FULL_SCALE / U16_FULL_SCALE
}

/// Rounds a 0..=255 value to the nearest byte, ties to even.
#[inline]
pub fn quantize(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, U8_FULL_SCALE) as u8
}
