//! assetkiln CLI
//!
//! Command-line asset cooker: converts a tree of raw assets (textures,
//! models, audio, shaders) into engine-ready outputs with JSON metadata
//! sidecars, optionally aggregating them into a manifest.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use assetkiln_cooker::{CookOptions, Cooker, ManifestBuilder};
use assetkiln_processors::ProcessorRegistry;

/// assetkiln - cook raw game assets into engine-ready formats
#[derive(Parser)]
#[command(name = "assetkiln")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input directory or file
    input: PathBuf,

    /// Output directory or file
    output: PathBuf,

    /// Process directories recursively (default)
    #[arg(long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recursive: bool,

    /// Generate an asset manifest after cooking
    #[arg(long)]
    generate_manifest: bool,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,

    /// Number of parallel cook workers (1 = serial, 0 = auto)
    #[arg(long, default_value = "1")]
    threads: usize,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Fatal before any work: nothing is cooked from a missing input.
    if !cli.input.exists() {
        bail!("Input path does not exist: {}", cli.input.display());
    }

    let registry = ProcessorRegistry::with_default_processors();

    if cli.input.is_file() {
        debug!(input = %cli.input.display(), "Cooking single file");
        let cooker = Cooker::new(&registry);
        if !cooker.cook_one(&cli.input, &cli.output) {
            bail!("Failed to cook asset: {}", cli.input.display());
        }
        println!("Asset cooked successfully");
        return Ok(());
    }

    let options = CookOptions {
        recursive: cli.recursive || !cli.no_recursive,
        threads: cli.threads,
    };
    debug!(
        recursive = options.recursive,
        threads = options.threads,
        force = cli.force,
        "Cooking directory"
    );

    let cooker = Cooker::with_options(&registry, options);
    let stats = cooker.cook_tree(&cli.input, &cli.output);

    println!("Cooking complete:");
    println!("  Processed: {}", stats.processed);
    println!("  Failed:    {}", stats.failed);

    if cli.generate_manifest {
        let manifest_path = ManifestBuilder::new()
            .build(&cli.output)
            .context("Failed to generate asset manifest")?;
        println!("  Manifest:  {}", manifest_path.display());
    }

    if !stats.all_succeeded() {
        bail!("{} assets failed to cook", stats.failed);
    }

    Ok(())
}
