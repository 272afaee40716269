//! Batch ingestion of a media directory.
//!
//! Walks a source directory, normalizes and uploads every regular file in
//! parallel, and collects one [`MediaRecord`] per success. A file that
//! fails keeps its error in the report instead of aborting the batch —
//! one corrupt scan should not sink a whole media-library import.

use crate::asset::SourceAsset;
use crate::pipeline::{NormalizeOptions, RasterBackend};
use crate::upload::{MediaRecord, Uploader, normalize_and_upload};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// One file that could not be ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a batch ingest: records in walk order plus the files that
/// failed.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<MediaRecord>,
    pub failures: Vec<IngestFailure>,
}

/// Normalize and upload every file under `source_dir`.
///
/// Files are processed in parallel; the backend and uploader are shared
/// across workers, which is sound because both are `Sync` and the
/// transform itself holds no cross-invocation state.
pub fn ingest_directory(
    backend: &impl RasterBackend,
    uploader: &impl Uploader,
    source_dir: &Path,
    opts: &NormalizeOptions,
    folder: &str,
) -> Result<IngestReport, IngestError> {
    let files = collect_files(source_dir)?;

    let results: Vec<Result<MediaRecord, IngestFailure>> = files
        .par_iter()
        .map(|path| {
            let source = SourceAsset::from_path(path).map_err(|e| IngestFailure {
                path: path.clone(),
                reason: format!("failed to read: {e}"),
            })?;
            normalize_and_upload(backend, uploader, &source, opts, folder).map_err(|e| {
                IngestFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })
        })
        .collect();

    let mut report = IngestReport::default();
    for result in results {
        match result {
            Ok(record) => report.records.push(record),
            Err(failure) => report.failures.push(failure),
        }
    }
    Ok(report)
}

/// Regular files under `dir` in sorted walk order. Hidden (dot-prefixed)
/// entries are skipped, directories are recursed.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| IngestError::Walk {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
