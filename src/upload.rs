//! The upload seam: normalize first, then hand the result to an injected
//! uploader.
//!
//! The pipeline never talks to storage itself. [`Uploader`] is the
//! collaborator contract — give it a normalized asset and a destination
//! path, get back a resolvable URL. [`normalize_and_upload`] composes the
//! two and produces the [`MediaRecord`] the caller persists to its
//! metadata store.

use crate::asset::{NormalizedAsset, SourceAsset};
use crate::naming::storage_path;
use crate::pipeline::{self, NormalizeOptions, PipelineError, RasterBackend};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("upload rejected: {0}")]
    Rejected(String),
}

/// Storage collaborator: receives a normalized asset and a destination
/// path, returns a publicly resolvable URL for it.
///
/// `Sync` because batch ingestion shares one uploader across rayon
/// workers.
pub trait Uploader: Sync {
    fn upload(&self, asset: &NormalizedAsset, destination: &str) -> Result<String, UploadError>;
}

/// Uploader backed by a local directory.
///
/// Writes each asset under `root/{destination}` and returns
/// `{public_base}/{destination}` — the shape a remote object store's
/// download URL takes, resolvable when `public_base` is served from
/// `root`.
pub struct DirectoryUploader {
    root: PathBuf,
    public_base: String,
}

impl DirectoryUploader {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Uploader for DirectoryUploader {
    fn upload(&self, asset: &NormalizedAsset, destination: &str) -> Result<String, UploadError> {
        let path = self.root.join(destination);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &asset.content)?;
        Ok(format!("{}/{}", self.public_base, destination))
    }
}

/// Metadata record for one uploaded asset.
///
/// Field set follows the CMS media-library document: name, URL, type,
/// size, storage path, upload time — plus the output dimensions and a
/// content digest the metadata store can use as a dedupe key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: u64,
    pub storage_path: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// SHA-256 of the uploaded content, lowercase hex.
    pub content_digest: String,
    pub uploaded_at_millis: u64,
}

/// Failure of the combined normalize-then-upload flow.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Normalize `source` and hand the result to `uploader` under
/// `{folder}/{timestamp}_{name}`.
///
/// Normalization failures surface before anything touches the uploader,
/// so a failed asset leaves no orphaned object behind.
pub fn normalize_and_upload(
    backend: &impl RasterBackend,
    uploader: &impl Uploader,
    source: &SourceAsset,
    opts: &NormalizeOptions,
    folder: &str,
) -> Result<MediaRecord, MediaError> {
    let asset = pipeline::normalize(backend, source, opts)?;
    let uploaded_at = now_millis();
    let destination = storage_path(folder, uploaded_at, &asset.name);
    let file_url = uploader.upload(&asset, &destination)?;

    Ok(MediaRecord {
        file_name: asset.name.clone(),
        file_url,
        file_type: asset.media_type.clone(),
        file_size: asset.byte_size() as u64,
        storage_path: destination,
        width: asset.dimensions.map(|d| d.width),
        height: asset.dimensions.map(|d| d.height),
        content_digest: hex_digest(&asset.content),
        uploaded_at_millis: uploaded_at,
    })
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn hex_digest(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // write! to a String cannot fail
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
