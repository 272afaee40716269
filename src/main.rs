use clap::{Parser, Subcommand};
use media_prep::asset::SourceAsset;
use media_prep::config::PrepConfig;
use media_prep::ingest;
use media_prep::pipeline::{NormalizeOptions, Quality, RustBackend};
use media_prep::upload::{DirectoryUploader, normalize_and_upload};
use std::path::{Path, PathBuf};

/// Shared flags for commands that run the pipeline. Each one overrides
/// the corresponding config value.
#[derive(clap::Args, Clone)]
struct PrepArgs {
    /// Maximum output width in pixels
    #[arg(long)]
    max_width: Option<u32>,

    /// JPEG quality in (0, 1]
    #[arg(long)]
    quality: Option<f32>,

    /// Storage folder prefix for uploaded assets
    #[arg(long)]
    folder: Option<String>,
}

#[derive(Parser)]
#[command(name = "media-prep")]
#[command(about = "Normalize images for CMS media-library upload")]
#[command(long_about = "\
Normalize images for CMS media-library upload

Images wider than the bound (default 1200px) are scaled down with their
aspect ratio preserved and re-encoded as JPEG (default quality 0.8);
narrower images are re-encoded at their original size. Non-image files
pass through untouched. Each result is written under the upload root at
{folder}/{timestamp}_{name} and described by a metadata record.

Run 'media-prep gen-config' to print a documented media-prep.toml.")]
#[command(version)]
struct Cli {
    /// Config file (TOML); flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Upload root directory
    #[arg(long, default_value = "uploads", global = true)]
    output: PathBuf,

    /// Base URL prefixed to returned asset URLs
    #[arg(long, default_value = "/uploads", global = true)]
    public_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize and upload a single file, printing its metadata record
    Normalize {
        file: PathBuf,
        #[command(flatten)]
        prep: PrepArgs,
    },
    /// Normalize and upload every file under a directory, writing a JSON
    /// manifest of the records
    Ingest {
        dir: PathBuf,
        /// Manifest output path
        #[arg(long, default_value = "media-manifest.json")]
        manifest: PathBuf,
        #[command(flatten)]
        prep: PrepArgs,
    },
    /// Print a stock media-prep.toml with all options documented
    GenConfig,
}

/// Merge config file values with command-line overrides.
fn resolve(
    config: Option<&Path>,
    prep: &PrepArgs,
) -> Result<(NormalizeOptions, String), Box<dyn std::error::Error>> {
    let cfg = PrepConfig::load(config)?;
    let defaults = cfg.options();
    let opts = NormalizeOptions {
        max_width: prep.max_width.map_or(defaults.max_width, |w| w.max(1)),
        quality: prep.quality.map_or(defaults.quality, Quality::new),
    };
    let folder = prep.folder.clone().unwrap_or(cfg.folder);
    Ok((opts, folder))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { file, prep } => {
            let (opts, folder) = resolve(cli.config.as_deref(), &prep)?;
            let backend = RustBackend::new();
            let uploader = DirectoryUploader::new(cli.output.as_path(), cli.public_base.as_str());

            let source = SourceAsset::from_path(&file)?;
            let record = normalize_and_upload(&backend, &uploader, &source, &opts, &folder)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Ingest {
            dir,
            manifest,
            prep,
        } => {
            let (opts, folder) = resolve(cli.config.as_deref(), &prep)?;
            let backend = RustBackend::new();
            let uploader = DirectoryUploader::new(cli.output.as_path(), cli.public_base.as_str());

            let report = ingest::ingest_directory(&backend, &uploader, &dir, &opts, &folder)?;
            for failure in &report.failures {
                eprintln!("skipped {}: {}", failure.path.display(), failure.reason);
            }

            let json = serde_json::to_string_pretty(&report.records)?;
            std::fs::write(&manifest, json)?;
            println!(
                "{} uploaded, {} failed, manifest at {}",
                report.records.len(),
                report.failures.len(),
                manifest.display()
            );
        }
        Command::GenConfig => {
            print!("{}", PrepConfig::template());
        }
    }

    Ok(())
}
