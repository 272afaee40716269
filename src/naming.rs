//! Centralized filename derivation for uploaded assets.
//!
//! Two conventions live here:
//! - re-encoded images keep their base name but carry a forced `.jpg`
//!   extension (`photo.png` → `photo.jpg`)
//! - storage destinations are `{folder}/{timestamp}_{file_name}`, so
//!   repeated uploads of the same name never overwrite each other

/// Display name for a re-encoded image: everything before the last `.`
/// (the whole name when there is none) plus `.jpg`.
///
/// Handles these patterns:
/// - `"photo.png"` → `"photo.jpg"`
/// - `"photo"` → `"photo.jpg"`
/// - `"my.photo.v2.png"` → `"my.photo.v2.jpg"`
pub fn jpeg_file_name(original: &str) -> String {
    let base = match original.rsplit_once('.') {
        Some((base, _)) => base,
        None => original,
    };
    format!("{base}.jpg")
}

/// Storage destination handed to the upload collaborator.
///
/// A trailing `/` on `folder` is tolerated so config values like
/// `"media_library/"` don't produce a double separator.
pub fn storage_path(folder: &str, timestamp_millis: u64, file_name: &str) -> String {
    format!(
        "{}/{}_{}",
        folder.trim_end_matches('/'),
        timestamp_millis,
        file_name
    )
}
