//! High-level normalization.
//!
//! [`normalize`] combines classification, the dimension calculation, and
//! backend execution. It decides *what* to produce; the backend does the
//! pixel work.

use super::backend::{Dimensions, PipelineError, RasterBackend};
use super::calculations::calculate_target_dimensions;
use super::params::NormalizeOptions;
use crate::asset::{NormalizedAsset, SourceAsset};
use crate::naming::jpeg_file_name;

/// Media type every re-encoded image carries.
pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

/// Normalize one asset for upload.
///
/// Image inputs (declared `image/*`) are measured, bounded to
/// `opts.max_width` with their aspect ratio preserved — never upscaled —
/// and re-encoded as JPEG at `opts.quality`. Every image goes through the
/// re-encode unconditionally; there is no "already small enough"
/// short-circuit, so output bytes are not guaranteed smaller than input
/// for tiny or highly compressed sources. The output name is the source's
/// base name with a forced `.jpg` extension. Transparency does not survive
/// the JPEG re-encode.
///
/// Non-image inputs pass through byte-identical with their original media
/// type and name.
///
/// This is a pure in-memory transform: no I/O, no retries, `source` is
/// never mutated. Each call is independent, so callers may run any number
/// of them concurrently and simply discard results they no longer need.
///
/// # Errors
///
/// [`PipelineError::EmptySource`] for empty content;
/// [`PipelineError::Decode`], [`PipelineError::SurfaceUnavailable`], or
/// [`PipelineError::Encode`] from the backend. Any error means no output
/// was produced for this asset.
pub fn normalize(
    backend: &impl RasterBackend,
    source: &SourceAsset,
    opts: &NormalizeOptions,
) -> Result<NormalizedAsset, PipelineError> {
    if source.content.is_empty() {
        return Err(PipelineError::EmptySource);
    }

    if !source.is_image() {
        return Ok(NormalizedAsset {
            content: source.content.clone(),
            media_type: source.media_type.clone(),
            name: source.name.clone(),
            dimensions: None,
        });
    }

    let decoded = backend.identify(&source.content)?;
    let (width, height) =
        calculate_target_dimensions((decoded.width, decoded.height), opts.max_width);
    let target = Dimensions { width, height };
    let content = backend.rescale_to_jpeg(&source.content, target, opts.quality)?;

    Ok(NormalizedAsset {
        content,
        media_type: JPEG_MEDIA_TYPE.to_string(),
        name: jpeg_file_name(&source.name),
        dimensions: Some(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::backend::tests::{MOCK_JPEG, MockBackend, RecordedOp};
    use crate::pipeline::params::Quality;

    fn image_source(name: &str, media_type: &str) -> SourceAsset {
        SourceAsset::new(vec![0xAB; 16], media_type, name)
    }

    #[test]
    fn empty_source_is_rejected_before_classification() {
        let backend = MockBackend::new();
        let source = SourceAsset::new(Vec::new(), "image/png", "a.png");
        let err = normalize(&backend, &source, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptySource));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn non_image_passes_through_untouched() {
        let backend = MockBackend::new();
        let source = SourceAsset::new(vec![1, 2, 3], "application/pdf", "report.pdf");

        let out = normalize(&backend, &source, &NormalizeOptions::default()).unwrap();
        assert_eq!(out.content, source.content);
        assert_eq!(out.media_type, "application/pdf");
        assert_eq!(out.name, "report.pdf");
        assert_eq!(out.dimensions, None);
        // The backend is never consulted for a pass-through.
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn wide_image_is_bounded_and_coerced_to_jpeg() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 3000,
            height: 2000,
        }]);
        let source = image_source("photo.png", "image/png");

        let out = normalize(&backend, &source, &NormalizeOptions::default()).unwrap();
        assert_eq!(out.media_type, JPEG_MEDIA_TYPE);
        assert_eq!(out.name, "photo.jpg");
        assert_eq!(
            out.dimensions,
            Some(Dimensions {
                width: 1200,
                height: 800,
            })
        );
        assert_eq!(out.content, MOCK_JPEG);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(
            &ops[1],
            RecordedOp::Rescale {
                width: 1200,
                height: 800,
                quality_percent: 80,
                ..
            }
        ));
    }

    #[test]
    fn narrow_image_keeps_decoded_dimensions() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 400,
            height: 300,
        }]);
        let source = image_source("small.jpg", "image/jpeg");

        let out = normalize(&backend, &source, &NormalizeOptions::default()).unwrap();
        assert_eq!(
            out.dimensions,
            Some(Dimensions {
                width: 400,
                height: 300,
            })
        );

        // Still re-rasterized and re-encoded; no short-circuit.
        let ops = backend.get_operations();
        assert!(matches!(
            &ops[1],
            RecordedOp::Rescale {
                width: 400,
                height: 300,
                ..
            }
        ));
    }

    #[test]
    fn name_without_extension_gains_jpg() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 10,
            height: 10,
        }]);
        let source = image_source("photo", "image/webp");
        let out = normalize(&backend, &source, &NormalizeOptions::default()).unwrap();
        assert_eq!(out.name, "photo.jpg");
    }

    #[test]
    fn custom_options_reach_the_backend() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 500,
        }]);
        let source = image_source("banner.png", "image/png");
        let opts = NormalizeOptions {
            max_width: 600,
            quality: Quality::new(0.5),
        };

        let out = normalize(&backend, &source, &opts).unwrap();
        assert_eq!(
            out.dimensions,
            Some(Dimensions {
                width: 600,
                height: 300,
            })
        );
        assert!(matches!(
            &backend.get_operations()[1],
            RecordedOp::Rescale {
                quality_percent: 50,
                ..
            }
        ));
    }

    #[test]
    fn decode_failure_propagates_without_output() {
        // No mock dimensions loaded: identify fails as a decode error.
        let backend = MockBackend::new();
        let source = image_source("broken.png", "image/png");
        let err = normalize(&backend, &source, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }

    #[test]
    fn rescale_failure_propagates() {
        let backend = MockBackend {
            identify_results: std::sync::Mutex::new(vec![Dimensions {
                width: 100,
                height: 100,
            }]),
            fail_rescale: Some("boom".to_string()),
            ..MockBackend::default()
        };
        let source = image_source("a.png", "image/png");
        let err = normalize(&backend, &source, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(msg) if msg == "boom"));
    }
}
