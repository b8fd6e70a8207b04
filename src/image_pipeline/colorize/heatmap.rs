//! False-color heatmap gradient.
//!
//! Five stops (blue, cyan, green, yellow, red) joined by four equal-width linear
//! segments over the normalized intensity `t` in `[0, 1]`.

use tracing::debug;

use crate::image_pipeline::colorize::types::Rgb;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::surface::PixelGrid;

const GRADIENT_STOPS: [Rgb; 5] = [
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 0),
];

const SEGMENT_WIDTH: f64 = 0.25;
const LAST_SEGMENT: usize = GRADIENT_STOPS.len() - 2;

/// Maps an intensity on the 0..=255 scale to a heatmap color.
///
/// `scale` multiplies the normalized intensity before clamping, so values above 1
/// saturate toward red sooner.
pub fn colorize(intensity: f64, scale: f64) -> Rgb {
    gradient_color(intensity / 255.0 * scale)
}

/// Gradient color at position `t`. Out-of-range and NaN positions clamp into `[0, 1]`.
pub fn gradient_color(t: f64) -> Rgb {
    // max/min rather than clamp: NaN collapses to 0 instead of propagating.
    let t = t.max(0.0).min(1.0);

    let segment = ((t / SEGMENT_WIDTH) as usize).min(LAST_SEGMENT);
    let local = (t - segment as f64 * SEGMENT_WIDTH) / SEGMENT_WIDTH;

    let from = GRADIENT_STOPS[segment];
    let to = GRADIENT_STOPS[segment + 1];

    Rgb::new(
        lerp_channel(from.r, to.r, local),
        lerp_channel(from.g, to.g, local),
        lerp_channel(from.b, to.b, local),
    )
}

#[inline]
fn lerp_channel(from: u8, to: u8, f: f64) -> u8 {
    let v = from as f64 * (1.0 - f) + to as f64 * f;
    v.round().clamp(0.0, 255.0) as u8
}

/// Renders the horizontal gradient bar displayed alongside a heatmap view.
pub fn heatmap_legend(width: usize, height: usize) -> Result<PixelGrid> {
    let mut grid = PixelGrid::new(width, height)?;
    debug!("Rendering heatmap legend {}x{}", width, height);

    let span = (width - 1).max(1) as f64;
    let columns: Vec<Rgb> = (0..width).map(|x| gradient_color(x as f64 / span)).collect();

    for (i, px) in grid.pixels_mut().enumerate() {
        let color = columns[i % width];
        px.copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    Ok(grid)
}
