//! Raster backend trait and shared pipeline types.
//!
//! The [`RasterBackend`] trait defines the two pixel operations the
//! pipeline needs: a cheap dimension probe, and the combined
//! decode → scale → JPEG-encode step.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked into the binary.

use super::params::Quality;
use thiserror::Error;

/// Failure taxonomy for the pipeline.
///
/// Every failure aborts normalization of that asset; no partial output is
/// ever produced. The pipeline does not retry — a corrupt file stays
/// corrupt, so retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source asset has no content. Rejected before classification so
    /// an empty file can neither decode nor pass through.
    #[error("source asset is empty")]
    EmptySource,
    /// The content is not a decodable image despite its `image/*` declared
    /// type.
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// The rasterization target could not be created.
    #[error("raster surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// The scaled surface could not be serialized to JPEG bytes.
    #[error("failed to encode JPEG: {0}")]
    Encode(String),
}

/// Pixel dimensions, as decoded from a source or as targeted for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for raster backends.
///
/// Operations stay backend-agnostic so pipeline logic is testable with a
/// recording mock. `Sync` because batch ingestion shares one backend
/// across rayon workers.
pub trait RasterBackend: Sync {
    /// Decode pixel dimensions from encoded bytes (header probe, no full
    /// decode).
    fn identify(&self, content: &[u8]) -> Result<Dimensions, PipelineError>;

    /// Decode `content`, scale it to exactly `target` (direct scale, no
    /// crop), and encode the result as JPEG at `quality`.
    fn rescale_to_jpeg(
        &self,
        content: &[u8],
        target: Dimensions,
        quality: Quality,
    ) -> Result<Vec<u8>, PipelineError>;
}
