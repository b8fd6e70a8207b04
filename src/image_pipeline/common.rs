//! Common utilities module
//!
//! Shared error type and the RGBA surface every stage of the pipeline writes into.

pub mod error;
pub mod surface;

pub use error::{ConversionError, Result};
pub use surface::PixelGrid;
