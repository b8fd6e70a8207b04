use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::{error::{ConversionError, Result}, surface::PixelGrid},
    conversions::timing::{PipelineTimings, Timer},
    export::{ExportConfig, ImageWriter, StandardImageWriter},
    params::RenderParams,
    raw::{DumpDecoder, StandardDumpDecoder},
};

/// Raw dump -> RGBA grid -> encoded image.
///
/// The pipeline holds no per-render state; every call decodes from scratch.
pub struct RawDumpPipeline<D: DumpDecoder, W: ImageWriter> {
    decoder: D,
    writer: W,
    config: ExportConfig,
}

impl RawDumpPipeline<StandardDumpDecoder, StandardImageWriter> {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            decoder: StandardDumpDecoder,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<D: DumpDecoder, W: ImageWriter> RawDumpPipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, config: ExportConfig) -> Self {
        Self {
            decoder,
            writer,
            config,
        }
    }

    /// Decodes `buffer` into a fresh grid. Nothing is written anywhere.
    #[instrument(skip(self, buffer, params), fields(input_size = buffer.len()))]
    pub fn render(&self, buffer: &[u8], params: &RenderParams) -> Result<PixelGrid> {
        let _span = tracing::info_span!(
            "decode_dump",
            width = params.geometry.width,
            height = params.geometry.height
        )
        .entered();
        self.decoder.decode(buffer, params)
    }

    #[instrument(skip_all)]
    pub fn export(&self, grid: &PixelGrid, output: &mut dyn Write) -> Result<()> {
        self.writer.write_image(grid, output, &self.config)
    }

    pub fn convert(&self, buffer: &[u8], params: &RenderParams, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(buffer, params, output).map(|_| ())
    }

    #[instrument(skip(self, buffer, params, output), fields(input_size = buffer.len()))]
    pub fn convert_with_timings(
        &self,
        buffer: &[u8],
        params: &RenderParams,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting raw dump conversion");

        let timer = Timer::start("render");
        let grid = self.render(buffer, params)?;
        timings.record(timer);

        let timer = Timer::start("encode");
        {
            let _span = tracing::info_span!("encode_image").entered();
            self.export(&grid, output)?;
        }
        timings.record(timer);

        info!(
            width = grid.width(),
            height = grid.height(),
            transparent = grid.transparent_pixels(),
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path, params))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        params: &RenderParams,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();
        let mut timings = PipelineTimings::new();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let timer = Timer::start("read_input_file");
        let input_data = std::fs::read(input_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        timings.record(timer);

        // Output is only created once the render succeeded.
        let timer = Timer::start("render");
        let grid = self.render(&input_data, params)?;
        timings.record(timer);

        let timer = Timer::start("create_output_file");
        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        timings.record(timer);

        let timer = Timer::start("encode");
        self.export(&grid, &mut output_file)?;
        timings.record(timer);

        Ok(timings)
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExportConfig) {
        self.config = config;
    }
}
