//! Decoder for headerless (or fixed-header) interleaved pixel dumps.
//!
//! Pixels are read in row-major order starting at the header offset. A pixel whose
//! bytes run past the end of the buffer is left transparent, so a truncated dump still
//! renders whatever prefix it holds.

use tracing::{debug, warn};

use crate::image_pipeline::colorize::{ColorMode, colorize};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::surface::PixelGrid;
use crate::image_pipeline::params::RenderParams;
use crate::image_pipeline::raw::decoder::DumpDecoder;
use crate::image_pipeline::raw::layout::{Sample, SampleLayout, quantize};
use crate::image_pipeline::raw::types::{Encoding, Geometry};

const OPAQUE: u8 = 255;

/// Stateless decoder for interleaved 8/16-bit gray, RGB and RGBA dumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDumpDecoder;

impl DumpDecoder for StandardDumpDecoder {
    fn decode(&self, buffer: &[u8], params: &RenderParams) -> Result<PixelGrid> {
        render(buffer, params)
    }
}

/// Decodes channel values straight into an RGBA grid.
///
/// # Errors
///
/// * `NotRenderable` if width or height is zero
/// * `DimensionOverflow` if the grid size does not fit in memory addressing
///
/// # Examples
///
/// ```
/// use rawdump_viewer::image_pipeline::{decode, Encoding, Geometry};
///
/// let grid = decode(&[10, 200], &Geometry::new(2, 1, 0), &Encoding::default()).unwrap();
/// assert_eq!(grid.as_bytes(), &[10, 10, 10, 255, 200, 200, 200, 255]);
/// ```
pub fn decode(buffer: &[u8], geometry: &Geometry, encoding: &Encoding) -> Result<PixelGrid> {
    render(
        buffer,
        &RenderParams::new(*geometry, *encoding, ColorMode::Direct),
    )
}

/// Decodes and colors a dump according to `params.color_mode`.
pub fn render(buffer: &[u8], params: &RenderParams) -> Result<PixelGrid> {
    let geometry = &params.geometry;
    let mut grid = PixelGrid::new(geometry.width, geometry.height)?;

    let layout = SampleLayout::resolve(&params.encoding);
    let pixel_data = buffer.get(geometry.header_offset..).unwrap_or(&[]);

    debug!(
        "Rendering {}x{} {:?} at offset {} from {} bytes ({:?})",
        geometry.width,
        geometry.height,
        layout,
        geometry.header_offset,
        buffer.len(),
        params.color_mode
    );

    let decoded = match params.color_mode {
        ColorMode::Direct => fill(&mut grid, pixel_data, layout, |sample| {
            sample.rgb().map(quantize)
        }),
        ColorMode::FalseColor { intensity_scale } => {
            fill(&mut grid, pixel_data, layout, |sample| {
                let c = colorize(sample.intensity(), intensity_scale);
                [c.r, c.g, c.b]
            })
        }
    };

    let expected = grid.pixel_count();
    if decoded < expected {
        warn!(
            "Input truncated: decoded {} of {} pixels, remainder left transparent",
            decoded, expected
        );
    }

    Ok(grid)
}

/// Writes every pixel that is fully backed by `pixel_data` and returns how many were written.
fn fill<F>(grid: &mut PixelGrid, pixel_data: &[u8], layout: SampleLayout, to_rgb: F) -> usize
where
    F: Fn(Sample) -> [u8; 3],
{
    let mut decoded = 0;
    // chunks_exact drops a trailing partial pixel, zip stops at the grid's end.
    for (raw, out) in pixel_data
        .chunks_exact(layout.bytes_per_pixel())
        .zip(grid.pixels_mut())
    {
        let [r, g, b] = to_rgb(layout.sample(raw));
        out.copy_from_slice(&[r, g, b, OPAQUE]);
        decoded += 1;
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::ConversionError;
    use crate::image_pipeline::raw::layout::rescale_u16;
    use crate::image_pipeline::raw::types::{BitDepth, ChannelCount};

    fn enc(bits: u32, channels: u32) -> Encoding {
        Encoding::from_raw(bits, channels).unwrap()
    }

    fn pixels(grid: &PixelGrid) -> Vec<[u8; 4]> {
        grid.as_bytes()
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect()
    }

    #[test]
    fn gray8_scenario() {
        let grid = decode(&[10, 200], &Geometry::new(2, 1, 0), &enc(8, 1)).unwrap();
        assert_eq!(pixels(&grid), vec![[10, 10, 10, 255], [200, 200, 200, 255]]);
    }

    #[test]
    fn rgb8_with_header_scenario() {
        let grid = decode(&[0, 50, 100, 150], &Geometry::new(1, 1, 1), &enc(8, 3)).unwrap();
        assert_eq!(pixels(&grid), vec![[50, 100, 150, 255]]);
    }

    #[test]
    fn zero_width_is_not_renderable() {
        let err = decode(&[1, 2, 3], &Geometry::new(0, 1, 0), &enc(8, 1)).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::NotRenderable { width: 0, height: 1 }
        ));
    }

    #[test]
    fn zero_height_is_not_renderable() {
        let err = decode(&[1, 2, 3], &Geometry::new(3, 0, 0), &enc(8, 1)).unwrap_err();
        assert!(matches!(err, ConversionError::NotRenderable { .. }));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = decode(&[], &Geometry::new(usize::MAX, 2, 0), &enc(8, 1)).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionOverflow { .. }));
    }

    #[test]
    fn rescale_16bit_endpoints() {
        assert_eq!(rescale_u16(0x00, 0x00), 0.0);
        assert_eq!(rescale_u16(0xFF, 0xFF), 255.0);
        let one = rescale_u16(0x01, 0x00);
        assert!((one - 255.0 / 65535.0).abs() < 1e-12);
        assert!((rescale_u16(0x00, 0x01) - 256.0 * 255.0 / 65535.0).abs() < 1e-12);
    }

    #[test]
    fn gray16_is_little_endian_and_rescaled() {
        // 0x0001 -> ~0.004 -> 0, 0x0100 -> ~0.996 -> 1, 0x8000 -> 127.50... -> 128, 0xFFFF -> 255
        let buffer = [0x01u8, 0x00, 0x00, 0x01, 0x00, 0x80, 0xFF, 0xFF];
        let grid = decode(&buffer, &Geometry::new(4, 1, 0), &enc(16, 1)).unwrap();
        let gray: Vec<u8> = pixels(&grid).iter().map(|p| p[0]).collect();
        assert_eq!(gray, vec![0, 1, 128, 255]);
    }

    #[test]
    fn rgb16_uses_each_channel() {
        let buffer = [0xFFu8, 0xFF, 0x00, 0x00, 0x00, 0x80];
        let grid = decode(&buffer, &Geometry::new(1, 1, 0), &enc(16, 3)).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([255, 0, 128, 255]));
    }

    #[test]
    fn rgba_ignores_alpha_but_keeps_stride() {
        let buffer = [1u8, 2, 3, 0, 4, 5, 6, 17];
        let grid = decode(&buffer, &Geometry::new(2, 1, 0), &enc(8, 4)).unwrap();
        assert_eq!(pixels(&grid), vec![[1, 2, 3, 255], [4, 5, 6, 255]]);

        let buffer16 = [
            0xFFu8, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, // pixel 0, alpha 0
            0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, // pixel 1
        ];
        let grid16 = decode(&buffer16, &Geometry::new(2, 1, 0), &enc(16, 4)).unwrap();
        assert_eq!(pixels(&grid16), vec![[255, 0, 255, 255], [0, 255, 0, 255]]);
    }

    #[test]
    fn exact_buffer_fills_every_pixel() {
        let geometry = Geometry::new(7, 5, 3);
        for encoding in [enc(8, 1), enc(8, 3), enc(8, 4), enc(16, 1), enc(16, 3), enc(16, 4)] {
            let len = geometry.header_offset + 7 * 5 * encoding.bytes_per_pixel();
            let buffer: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let grid = decode(&buffer, &geometry, &encoding).unwrap();
            assert_eq!(grid.transparent_pixels(), 0, "{:?}", encoding);
        }
    }

    #[test]
    fn decode_is_idempotent() {
        let buffer: Vec<u8> = (0..=255).collect();
        let geometry = Geometry::new(8, 8, 0);
        let first = decode(&buffer, &geometry, &enc(16, 3)).unwrap();
        let second = decode(&buffer, &geometry, &enc(16, 3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn truncated_buffer_keeps_valid_prefix() {
        let geometry = Geometry::new(4, 3, 2);
        let encoding = enc(8, 3);
        let full: Vec<u8> = (0..2 + 4 * 3 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let reference = decode(&full, &geometry, &encoding).unwrap();

        // cut mid-way through the sixth pixel
        let truncated = &full[..2 + 5 * 3 + 1];
        let grid = decode(truncated, &geometry, &encoding).unwrap();

        let got = pixels(&grid);
        let want = pixels(&reference);
        assert_eq!(&got[..5], &want[..5]);
        assert!(got[5..].iter().all(|p| *p == [0, 0, 0, 0]));
        assert_eq!(grid.transparent_pixels(), 12 - 5);
    }

    #[test]
    fn header_past_end_renders_fully_transparent() {
        let grid = decode(&[1, 2, 3], &Geometry::new(2, 2, 10), &enc(8, 1)).unwrap();
        assert_eq!(grid.transparent_pixels(), 4);
        assert_eq!(grid.as_bytes().len(), 16);
    }

    #[test]
    fn extra_trailing_bytes_are_ignored() {
        let grid = decode(&[9, 8, 7, 6, 5], &Geometry::new(1, 2, 0), &enc(8, 1)).unwrap();
        assert_eq!(pixels(&grid), vec![[9, 9, 9, 255], [8, 8, 8, 255]]);
    }

    #[test]
    fn false_color_gray_endpoints() {
        let params = RenderParams::builder()
            .dimensions(2, 1)
            .color_mode(ColorMode::false_color(1.0).unwrap())
            .build();
        let grid = render(&[0, 255], &params).unwrap();
        assert_eq!(pixels(&grid), vec![[0, 0, 255, 255], [255, 0, 0, 255]]);
    }

    #[test]
    fn false_color_averages_rgb() {
        // mean of (255, 255, 0) is 170 -> t = 2/3, inside green -> yellow
        let params = RenderParams::builder()
            .dimensions(1, 1)
            .channels(ChannelCount::Rgb)
            .color_mode(ColorMode::false_color(1.0).unwrap())
            .build();
        let grid = render(&[255, 255, 0], &params).unwrap();
        let expected = colorize(170.0, 1.0);
        assert_eq!(grid.pixel(0, 0), Some([expected.r, expected.g, expected.b, 255]));
        assert_eq!(expected.b, 0);
        assert_eq!(expected.g, 255);
    }

    #[test]
    fn false_color_uses_unrounded_16bit_intensity() {
        // 0x8000 rescales to 127.50..., i.e. just past the midpoint of the gradient
        let params = RenderParams::builder()
            .dimensions(1, 1)
            .bit_depth(BitDepth::Sixteen)
            .color_mode(ColorMode::false_color(1.0).unwrap())
            .build();
        let grid = render(&[0x00, 0x80], &params).unwrap();
        let expected = colorize(rescale_u16(0x00, 0x80), 1.0);
        assert_eq!(grid.pixel(0, 0), Some([expected.r, expected.g, expected.b, 255]));
    }

    #[test]
    fn false_color_rgba_ignores_fourth_channel() {
        let params = RenderParams::builder()
            .dimensions(1, 1)
            .channels(ChannelCount::Rgba)
            .color_mode(ColorMode::false_color(1.0).unwrap())
            .build();
        let clear = render(&[30, 60, 90, 0], &params).unwrap();
        let opaque = render(&[30, 60, 90, 255], &params).unwrap();
        assert_eq!(clear, opaque);

        // mean of (30, 60, 90) only
        let expected = colorize(60.0, 1.0);
        assert_eq!(clear.pixel(0, 0), Some([expected.r, expected.g, expected.b, 255]));
    }

    #[test]
    fn false_color_rgba16_steps_eight_bytes() {
        let params = RenderParams::builder()
            .dimensions(2, 1)
            .encoding(enc(16, 4))
            .color_mode(ColorMode::false_color(1.0).unwrap())
            .build();
        // white with zero alpha, then pure blue with full alpha
        let buffer = [
            0xFFu8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let grid = render(&buffer, &params).unwrap();

        let hot = colorize(255.0, 1.0);
        let cool = colorize(85.0, 1.0);
        assert_eq!(grid.pixel(0, 0), Some([hot.r, hot.g, hot.b, 255]));
        assert_eq!(grid.pixel(1, 0), Some([cool.r, cool.g, cool.b, 255]));
        assert_eq!(grid.transparent_pixels(), 0);
    }

    #[test]
    fn false_color_leaves_truncated_pixels_transparent() {
        let params = RenderParams::builder()
            .dimensions(3, 1)
            .color_mode(ColorMode::false_color(2.0).unwrap())
            .build();
        let grid = render(&[100], &params).unwrap();
        assert_eq!(grid.transparent_pixels(), 2);
        assert_eq!(grid.pixel(0, 0).map(|p| p[3]), Some(255));
    }

    #[test]
    fn trait_impl_matches_free_function() {
        let params = RenderParams::builder().dimensions(2, 2).build();
        let buffer = [1u8, 2, 3, 4];
        assert_eq!(
            StandardDumpDecoder.decode(&buffer, &params).unwrap(),
            render(&buffer, &params).unwrap()
        );
    }
}
