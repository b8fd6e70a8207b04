//! Raw pixel dump decoding module
//!
//! This module turns an untyped byte buffer plus declared geometry and encoding into
//! an RGBA grid.

mod decoder;
mod standard_decoder;
pub mod layout;
pub mod types;

pub use decoder::DumpDecoder;
pub use standard_decoder::{StandardDumpDecoder, decode, render};
pub use layout::{Sample, SampleLayout};
pub use types::{BitDepth, ChannelCount, Encoding, Geometry};
