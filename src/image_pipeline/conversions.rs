//! Pipeline conversions module
//!
//! This module contains orchestration logic that takes a raw dump from bytes on disk
//! to an exported image.

mod raw_to_image;
mod timing;


pub use raw_to_image::RawDumpPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
