//! Render parameter record and its builder

use crate::image_pipeline::colorize::ColorMode;
use crate::image_pipeline::raw::{BitDepth, ChannelCount, Encoding, Geometry};

/// Everything a render needs besides the buffer itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderParams {
    pub geometry: Geometry,
    pub encoding: Encoding,
    pub color_mode: ColorMode,
}

impl RenderParams {
    pub fn new(geometry: Geometry, encoding: Encoding, color_mode: ColorMode) -> Self {
        Self {
            geometry,
            encoding,
            color_mode,
        }
    }

    pub fn builder() -> RenderParamsBuilder {
        RenderParamsBuilder::default()
    }
}

/// Builder for RenderParams
#[derive(Default)]
pub struct RenderParamsBuilder {
    width: Option<usize>,
    height: Option<usize>,
    header_offset: Option<usize>,
    bit_depth: Option<BitDepth>,
    channels: Option<ChannelCount>,
    color_mode: Option<ColorMode>,
}

impl RenderParamsBuilder {
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn dimensions(self, width: usize, height: usize) -> Self {
        self.width(width).height(height)
    }

    pub fn header_offset(mut self, offset: usize) -> Self {
        self.header_offset = Some(offset);
        self
    }

    pub fn bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    pub fn channels(mut self, channels: ChannelCount) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn encoding(self, encoding: Encoding) -> Self {
        self.bit_depth(encoding.bit_depth).channels(encoding.channels)
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    pub fn build(self) -> RenderParams {
        let default = RenderParams::default();
        RenderParams {
            geometry: Geometry {
                width: self.width.unwrap_or(default.geometry.width),
                height: self.height.unwrap_or(default.geometry.height),
                header_offset: self.header_offset.unwrap_or(default.geometry.header_offset),
            },
            encoding: Encoding {
                bit_depth: self.bit_depth.unwrap_or(default.encoding.bit_depth),
                channels: self.channels.unwrap_or(default.encoding.channels),
            },
            color_mode: self.color_mode.unwrap_or(default.color_mode),
        }
    }
}
