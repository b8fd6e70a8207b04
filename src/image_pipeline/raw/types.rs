//! Raw dump geometry and encoding types

use crate::image_pipeline::common::error::ConversionError;

/// Where the pixels are inside the dump and how many of them there are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Leading bytes to skip before pixel data begins
    pub header_offset: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize, header_offset: usize) -> Self {
        Self {
            width,
            height,
            header_offset,
        }
    }
}

/// Bits stored per channel sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    /// Little-endian 16-bit samples
    Sixteen,
}

impl BitDepth {
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    pub fn bytes_per_channel(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = ConversionError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(ConversionError::UnsupportedBitDepth(other)),
        }
    }
}

/// Interleaved channels per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCount {
    Gray,
    Rgb,
    /// The fourth channel only contributes to the pixel stride
    Rgba,
}

impl ChannelCount {
    pub fn count(self) -> usize {
        match self {
            ChannelCount::Gray => 1,
            ChannelCount::Rgb => 3,
            ChannelCount::Rgba => 4,
        }
    }
}

impl TryFrom<u32> for ChannelCount {
    type Error = ConversionError;

    fn try_from(channels: u32) -> Result<Self, Self::Error> {
        match channels {
            1 => Ok(ChannelCount::Gray),
            3 => Ok(ChannelCount::Rgb),
            4 => Ok(ChannelCount::Rgba),
            other => Err(ConversionError::UnsupportedChannelCount(other)),
        }
    }
}

/// Sample encoding of the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    pub bit_depth: BitDepth,
    pub channels: ChannelCount,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            bit_depth: BitDepth::Eight,
            channels: ChannelCount::Gray,
        }
    }
}

impl Encoding {
    pub fn new(bit_depth: BitDepth, channels: ChannelCount) -> Self {
        Self {
            bit_depth,
            channels,
        }
    }

    /// Builds an encoding from the numeric form values (bits per sample, channel count).
    pub fn from_raw(bits: u32, channels: u32) -> Result<Self, ConversionError> {
        Ok(Self::new(
            BitDepth::try_from(bits)?,
            ChannelCount::try_from(channels)?,
        ))
    }

    pub fn bytes_per_channel(&self) -> usize {
        self.bit_depth.bytes_per_channel()
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_channel() * self.channels.count()
    }
}
