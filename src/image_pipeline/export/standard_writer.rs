use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::common::surface::PixelGrid;
use crate::image_pipeline::export::types::{ExportConfig, ExportFormat, PngCompression, TiffCompression, TiffPredictor};
use crate::image_pipeline::export::writer::ImageWriter;

/// Writes RGBA8 grids as PNG or TIFF depending on `ExportConfig::format`.
pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, grid: &PixelGrid, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        let (width, height) = dimensions_u32(grid)?;
        debug!("Encoding {:?} image: {}x{}", config.format, width, height);

        match config.format {
            ExportFormat::Png => write_png(grid, width, height, output, config)?,
            ExportFormat::Tiff => write_tiff(grid, width, height, output, config)?,
        }

        debug!("{:?} encoding complete", config.format);
        Ok(())
    }
}

fn dimensions_u32(grid: &PixelGrid) -> Result<(u32, u32)> {
    let overflow = || ConversionError::DimensionOverflow {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| overflow())?;
    let height = u32::try_from(grid.height()).map_err(|_| overflow())?;
    Ok((width, height))
}

fn write_png(grid: &PixelGrid, width: u32, height: u32, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
    let compression = match config.png_compression {
        PngCompression::Fast => png::Compression::Fast,
        PngCompression::Default => png::Compression::Default,
        PngCompression::Best => png::Compression::Best,
    };

    let mut encoder = png::Encoder::new(output, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(compression);

    let mut writer = encoder
        .write_header()
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(grid.as_bytes())
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    Ok(())
}

fn write_tiff(grid: &PixelGrid, width: u32, height: u32, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
    // TiffEncoder needs Seek, so encode into memory first.
    let mut buffer = Vec::new();

    let compression = match config.tiff_compression {
        TiffCompression::None => tiff::encoder::Compression::Uncompressed,
        TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
        TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
        TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
    };

    let predictor = match config.predictor {
        TiffPredictor::None => tiff::tags::Predictor::None,
        TiffPredictor::Horizontal => tiff::tags::Predictor::Horizontal,
    };

    let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?
        .with_compression(compression)
        .with_predictor(predictor);

    encoder.write_image::<tiff::encoder::colortype::RGBA8>(
        width,
        height,
        grid.as_bytes(),
    ).map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    output.write_all(&buffer)?;
    Ok(())
}
