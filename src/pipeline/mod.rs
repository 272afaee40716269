//! The normalization pipeline: decode → measure → compute target →
//! rasterize → re-encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe dimensions** | `image::ImageReader::into_dimensions` |
//! | **Decode** (JPEG, PNG, WebP, GIF, TIFF) | `image` crate decoders |
//! | **Scale** | Lanczos3 via `image::imageops::resize` |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Parameters**: data structures describing what to do
//! - **Backend**: [`RasterBackend`] trait + [`RustBackend`]
//! - **Operations**: [`normalize`] combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, PipelineError, RasterBackend};
pub use calculations::calculate_target_dimensions;
pub use operations::{JPEG_MEDIA_TYPE, normalize};
pub use params::{NormalizeOptions, Quality};
pub use rust_backend::RustBackend;
