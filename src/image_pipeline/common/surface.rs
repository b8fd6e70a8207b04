//! RGBA raster produced by every render

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Bytes per output pixel (R, G, B, A).
pub const RGBA_CHANNELS: usize = 4;

/// Row-major RGBA8 raster.
///
/// Every grid starts fully zeroed (transparent black). Pixels the decoder cannot
/// source from the input keep that value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Allocates a zeroed grid.
    ///
    /// Fails with `NotRenderable` when either dimension is zero, and with
    /// `DimensionOverflow` when the byte size does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::NotRenderable { width, height });
        }

        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(RGBA_CHANNELS))
            .ok_or(ConversionError::DimensionOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// RGBA value at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * RGBA_CHANNELS;
        let px = &self.data[start..start + RGBA_CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterator over mutable RGBA cells in row-major order.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(RGBA_CHANNELS)
    }

    /// Number of pixels whose alpha is still zero.
    pub fn transparent_pixels(&self) -> usize {
        self.data
            .chunks_exact(RGBA_CHANNELS)
            .filter(|px| px[3] == 0)
            .count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
