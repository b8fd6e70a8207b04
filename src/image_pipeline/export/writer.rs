use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::surface::PixelGrid;
use crate::image_pipeline::export::types::ExportConfig;

pub trait ImageWriter {
    fn write_image(&self, grid: &PixelGrid, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
