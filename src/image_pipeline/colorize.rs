//! False-color module
//!
//! Maps scalar intensities onto a fixed blue to red heatmap gradient.

mod heatmap;
pub mod types;

pub use heatmap::{colorize, gradient_color, heatmap_legend};
pub use types::{ColorMode, DEFAULT_INTENSITY_SCALE, Rgb};
