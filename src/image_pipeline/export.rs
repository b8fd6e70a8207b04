//! Image export module
//!
//! This module writes rendered grids to lossless PNG or TIFF files.

mod writer;
mod standard_writer;
pub mod types;

pub use writer::ImageWriter;
pub use standard_writer::StandardImageWriter;
pub use types::{ExportConfig, ExportConfigBuilder, ExportFormat, PngCompression, TiffCompression, TiffPredictor};
