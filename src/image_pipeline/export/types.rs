//! Export configuration types

use std::path::Path;

/// Lossless container the rendered grid is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Tiff,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Tiff => "tiff",
        }
    }

    /// Infers the format from a file extension, case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ExportFormat::Png),
            "tif" | "tiff" => Some(ExportFormat::Tiff),
            _ => None,
        }
    }
}

/// PNG deflate effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// TIFF differencing predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffPredictor {
    #[default]
    None,
    /// Horizontal differencing (TIFF predictor 2), pays off with LZW or Deflate
    Horizontal,
}

/// Configuration for exporting a rendered grid
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output container
    pub format: ExportFormat,
    /// Compression effort when writing PNG
    pub png_compression: PngCompression,
    /// Compression method when writing TIFF
    pub tiff_compression: TiffCompression,
    /// TIFF predictor. Ignored for PNG.
    pub predictor: TiffPredictor,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            png_compression: PngCompression::Default,
            tiff_compression: TiffCompression::None,
            predictor: TiffPredictor::None,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    format: Option<ExportFormat>,
    png_compression: Option<PngCompression>,
    tiff_compression: Option<TiffCompression>,
    predictor: Option<TiffPredictor>,
}

impl ExportConfigBuilder {
    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = Some(compression);
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: TiffPredictor) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            format: self.format.unwrap_or(default.format),
            png_compression: self.png_compression.unwrap_or(default.png_compression),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
