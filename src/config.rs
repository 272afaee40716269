//! Tool configuration: width bound, encode quality, storage folder.
//!
//! Values layer environment variables over an optional TOML file over
//! built-in defaults. The defaults are the CMS uploader's
//! web-optimization settings (1200px bound, 80% quality,
//! `media_library/` folder).

use crate::pipeline::{NormalizeOptions, Quality};
use confique::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] confique::Error),
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
}

#[derive(Debug, Config)]
pub struct PrepConfig {
    /// Maximum output width in pixels; wider images are scaled down with
    /// their aspect ratio preserved. Images are never upscaled.
    #[config(default = 1200, env = "MEDIA_PREP_MAX_WIDTH")]
    pub max_width: u32,

    /// JPEG encode quality in (0, 1]. Out-of-range values are clamped.
    #[config(default = 0.8, env = "MEDIA_PREP_QUALITY")]
    pub quality: f32,

    /// Storage folder prefix for uploaded assets.
    #[config(default = "media_library", env = "MEDIA_PREP_FOLDER")]
    pub folder: String,
}

impl PrepConfig {
    /// Load from an optional TOML file, environment variables taking
    /// precedence.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            // confique treats a missing file as an empty layer; a path the
            // user passed explicitly should fail loudly instead.
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Documented TOML template with every option and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    /// Pipeline options from this config, quality clamped to its valid
    /// range.
    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions {
            max_width: self.max_width.max(1),
            quality: Quality::new(self.quality),
        }
    }
}
