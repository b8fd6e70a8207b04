use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::surface::PixelGrid;
use crate::image_pipeline::params::RenderParams;

pub trait DumpDecoder {
    fn decode(&self, buffer: &[u8], params: &RenderParams) -> Result<PixelGrid>;
}
