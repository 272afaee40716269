//! Shared asset types exchanged between pipeline stages.
//!
//! A [`SourceAsset`] is the raw user-selected file: bytes, declared media
//! type, and display name. A [`NormalizedAsset`] is what the pipeline hands
//! to the upload collaborator. Neither type knows where bytes come from or
//! go — file loading and uploading live at the edges.

use crate::pipeline::Dimensions;
use std::io;
use std::path::Path;

/// Extensions with a known media type, used when loading from disk.
///
/// Anything not listed is `application/octet-stream`, which puts it in the
/// non-image class and makes the pipeline pass it through untouched.
const MEDIA_TYPE_CANDIDATES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
];

/// Media type for a path based on its extension (case-insensitive).
pub fn guess_media_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| {
            MEDIA_TYPE_CANDIDATES
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
                .map(|(_, media_type)| *media_type)
        })
        .unwrap_or("application/octet-stream")
}

/// Raw input to the pipeline. Consumed once; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    pub content: Vec<u8>,
    /// Declared media type, e.g. `image/png`. The pipeline classifies on
    /// this string; the backend decodes from the content's actual magic
    /// bytes.
    pub media_type: String,
    /// Original display name, e.g. `photo.png`.
    pub name: String,
}

impl SourceAsset {
    pub fn new(
        content: Vec<u8>,
        media_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            content,
            media_type: media_type.into(),
            name: name.into(),
        }
    }

    /// Read a file from disk, guessing the media type from its extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        Ok(Self {
            content,
            media_type: guess_media_type(path).to_string(),
            name,
        })
    }

    /// Whether the declared media type puts this asset in the image class.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Pipeline output, ready for the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAsset {
    pub content: Vec<u8>,
    pub media_type: String,
    pub name: String,
    /// Output dimensions. `None` for non-image pass-through.
    pub dimensions: Option<Dimensions>,
}

impl NormalizedAsset {
    /// Byte size of the content as it will be uploaded.
    pub fn byte_size(&self) -> usize {
        self.content.len()
    }
}
