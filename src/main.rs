use rawdump_viewer::image_pipeline::{
    ColorMode, Encoding, ExportConfig, ExportFormat, RawDumpPipeline, RenderParams,
};
use rawdump_viewer::image_pipeline::colorize::DEFAULT_INTENSITY_SCALE;
use rawdump_viewer::logger;

use tracing::{error, info};

const INPUT_PATH: &str = "input.raw";
const OUTPUT_PATH: &str = "output.png";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting rawdump_viewer...");

    let params = RenderParams::builder()
        .dimensions(640, 480)
        .header_offset(0)
        .encoding(Encoding::from_raw(16, 1)?)
        .color_mode(ColorMode::false_color(DEFAULT_INTENSITY_SCALE)?)
        .build();

    let config = ExportConfig::builder()
        .format(ExportFormat::from_path(OUTPUT_PATH).unwrap_or_default())
        .build();
    let pipeline = RawDumpPipeline::new(config);

    info!(
        "Geometry: {}x{} (header {} bytes), {}-bit x{}",
        params.geometry.width,
        params.geometry.height,
        params.geometry.header_offset,
        params.encoding.bit_depth.bits(),
        params.encoding.channels.count()
    );
    info!("Color mode: {:?}", params.color_mode);
    info!("Export format: {:?}", pipeline.config().format);

    let timings = pipeline
        .convert_file(INPUT_PATH, OUTPUT_PATH, &params)
        .inspect_err(|e| error!("Conversion failed: {}", e))?;

    timings.log_summary();
    info!("Conversion successful!");

    Ok(())
}
