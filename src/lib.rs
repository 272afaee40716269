//! # media-prep
//!
//! Image normalization for CMS media-library uploads. Every user-selected
//! asset passes through one pipeline before it reaches object storage:
//!
//! ```text
//! decode → measure → compute target → rasterize → re-encode → upload
//! ```
//!
//! Images wider than the configured bound (default 1200px) are scaled down
//! with their aspect ratio preserved — never upscaled — and re-encoded as
//! JPEG at a fixed quality (default 0.8). Non-image files (documents) pass
//! through untouched. The result is handed to an injected
//! [`upload::Uploader`] together with the [`upload::MediaRecord`] the
//! caller persists to its metadata store.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`asset`] | `SourceAsset` / `NormalizedAsset` and media-type classification |
//! | [`naming`] | Forced `.jpg` names and `{folder}/{timestamp}_{name}` storage paths |
//! | [`pipeline`] | The transform: calculations, parameters, backend trait, `image`-crate backend, `normalize` |
//! | [`upload`] | `Uploader` seam, directory uploader, `MediaRecord`, `normalize_and_upload` |
//! | [`ingest`] | Parallel batch ingestion of a media directory |
//! | [`config`] | Defaults, TOML/env loading, documented config template |
//!
//! # Design Decisions
//!
//! ## JPEG-Only Output
//!
//! Every image re-encodes to JPEG regardless of source format (PNG, WebP,
//! GIF, TIFF). One output format keeps the media library uniform and file
//! sizes predictable. The cost: transparency is dropped on re-encode.
//! That trade-off is deliberate and undocumented to end users, matching
//! the upload flow this pipeline serves.
//!
//! ## Unconditional Re-Encode
//!
//! There is no "already small enough" short-circuit. A 50KB JPEG goes
//! through decode/scale/encode like everything else and may come out
//! larger. Predictable output (always JPEG, always within the width
//! bound) is worth the occasional size regression.
//!
//! ## Backend Seam
//!
//! Pixel work hides behind [`pipeline::RasterBackend`], so the operation
//! logic — classification, dimension math, naming — is tested with a
//! recording mock and never has to encode a byte. The production backend
//! is the pure-Rust `image` crate; no system dependencies.
//!
//! ## Synchronous, Independent Invocations
//!
//! The transform is a plain function: no shared state between calls, no
//! cancellation, no retries, no timeouts. Callers that must not block
//! (UI threads, async executors) schedule it off-thread themselves;
//! [`ingest`] does exactly that with a rayon pool for batch imports.

pub mod asset;
pub mod config;
pub mod ingest;
pub mod naming;
pub mod pipeline;
pub mod upload;
