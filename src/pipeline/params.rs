//! Parameter types for normalization.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations) (which decides what
//! to produce) and the [`backend`](super::backend) (which does the actual
//! pixel work).

/// Lossy JPEG encoding quality in (0, 1]. Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    /// Smallest accepted quality. Zero is not a valid JPEG quality, so
    /// out-of-range values clamp here instead.
    pub const MIN: f32 = 0.01;

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(Self::MIN, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Quality on the 1-100 scale JPEG encoders use.
    pub fn as_percent(self) -> u8 {
        (self.0 * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.8)
    }
}

/// Full specification for one normalization: width bound + encode quality.
///
/// Defaults match the CMS uploader's web-optimization settings: 1200px
/// bound at 80% quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Upper bound on output width in pixels; wider images scale down.
    pub max_width: u32,
    pub quality: Quality,
}

impl NormalizeOptions {
    pub const DEFAULT_MAX_WIDTH: u32 = 1200;
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_width: Self::DEFAULT_MAX_WIDTH,
            quality: Quality::default(),
        }
    }
}
