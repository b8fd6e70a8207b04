//! Image processing pipeline module
//!
//! This module provides a structured approach to viewing raw pixel dumps,
//! with separate modules for dump decoding, false-color mapping, image export,
//! and conversion orchestration.

pub mod raw;
pub mod colorize;
pub mod export;
pub mod conversions;
pub mod common;
pub mod params;

pub use common::{
    ConversionError,
    PixelGrid,
    Result,
};

pub use raw::{
    BitDepth,
    ChannelCount,
    DumpDecoder,
    Encoding,
    Geometry,
    StandardDumpDecoder,
    decode,
    render,
};

pub use colorize::{
    ColorMode,
    Rgb,
    colorize,
    heatmap_legend,
};

pub use export::{
    ExportConfig,
    ExportConfigBuilder,
    ExportFormat,
    ImageWriter,
    PngCompression,
    StandardImageWriter,
    TiffCompression,
    TiffPredictor,
};

pub use params::{
    RenderParams,
    RenderParamsBuilder,
};

pub use conversions::{
    PipelineTimings,
    RawDumpPipeline,
};
