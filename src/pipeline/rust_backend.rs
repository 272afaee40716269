//! Pure Rust raster backend — the `image` crate end to end.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Probe dimensions | `ImageReader::with_guessed_format` + `into_dimensions` |
//! | Decode (JPEG, PNG, WebP, GIF first frame, TIFF) | `image` crate decoders |
//! | Scale | `image::imageops::resize` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//!
//! Format selection always goes through `with_guessed_format`, so the
//! declared media type is never trusted for decoding — the content's magic
//! bytes are. JPEG has no alpha channel: decoded pixels are converted to
//! RGB8 before scaling, which drops transparency.

use super::backend::{Dimensions, PipelineError, RasterBackend};
use super::params::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use std::io::Cursor;

/// Raster backend on the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap encoded bytes in a reader with the format sniffed from content.
fn reader(content: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, PipelineError> {
    ImageReader::new(Cursor::new(content))
        .with_guessed_format()
        .map_err(|e| PipelineError::Decode(format!("unrecognized image container: {e}")))
}

/// Refuse target surfaces whose RGB8 buffer cannot be addressed.
fn check_surface(target: Dimensions) -> Result<(), PipelineError> {
    let bytes = (target.width as u64)
        .checked_mul(target.height as u64)
        .and_then(|pixels| pixels.checked_mul(3));
    match bytes {
        Some(n) if target.width > 0 && target.height > 0 && n <= isize::MAX as u64 => Ok(()),
        _ => Err(PipelineError::SurfaceUnavailable(format!(
            "cannot allocate a {}x{} RGB surface",
            target.width, target.height
        ))),
    }
}

impl RasterBackend for RustBackend {
    fn identify(&self, content: &[u8]) -> Result<Dimensions, PipelineError> {
        let (width, height) = reader(content)?
            .into_dimensions()
            .map_err(|e| PipelineError::Decode(format!("failed to read dimensions: {e}")))?;
        Ok(Dimensions { width, height })
    }

    fn rescale_to_jpeg(
        &self,
        content: &[u8],
        target: Dimensions,
        quality: Quality,
    ) -> Result<Vec<u8>, PipelineError> {
        let decoded = reader(content)?
            .decode()
            .map_err(|e| PipelineError::Decode(format!("failed to decode image: {e}")))?;

        // Alpha is dropped here; JPEG cannot carry it.
        let rgb: RgbImage = decoded.to_rgb8();

        check_surface(target)?;
        let scaled = image::imageops::resize(&rgb, target.width, target.height, FilterType::Lanczos3);

        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, quality.as_percent())
            .write_image(
                scaled.as_raw(),
                target.width,
                target.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
        Ok(out)
    }
}
