use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Image is not renderable: width={width}, height={height}")]
    NotRenderable { width: usize, height: usize },

    #[error("Image dimensions overflow addressable memory: width={width}, height={height}")]
    DimensionOverflow { width: usize, height: usize },

    #[error("Unsupported bit depth: {0} (expected 8 or 16)")]
    UnsupportedBitDepth(u32),

    #[error("Unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelCount(u32),

    #[error("Invalid heatmap intensity scale: {0} (must be finite and positive)")]
    InvalidIntensityScale(f64),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
