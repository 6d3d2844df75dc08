//! Manifest aggregation over a cooked output tree.
//!
//! The builder scans the output root for metadata sidecars, parses each one,
//! and writes a single manifest document listing every record with its
//! output-relative path. The manifest is regenerated wholesale on every
//! build and excludes itself from the scan.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};
use walkdir::WalkDir;

use assetkiln_core::{
    is_sidecar, AssetMetadata, Manifest, ManifestEntry, MANIFEST_FILE_NAME,
};

/// Errors that can occur while writing the manifest
///
/// Corrupt sidecars are not represented here: a record that fails to parse
/// is logged and skipped, never fatal to aggregation.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Aggregates sidecar records under an output root into a manifest
#[derive(Debug, Default)]
pub struct ManifestBuilder;

impl ManifestBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Scan `output_dir` recursively and write `manifest.json` at its root
    ///
    /// Entries are sorted by their output-relative path so regeneration
    /// produces identical output for identical trees regardless of
    /// filesystem enumeration order. Returns the manifest path.
    pub fn build(&self, output_dir: &Path) -> ManifestResult<PathBuf> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(output_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let sidecar = entry.path();
            if !is_sidecar(sidecar) {
                continue;
            }
            if sidecar.file_name().and_then(|n| n.to_str()) == Some(MANIFEST_FILE_NAME) {
                continue;
            }

            let metadata = match Self::read_record(sidecar) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(sidecar = %sidecar.display(), error = %e, "Skipping corrupt sidecar");
                    continue;
                }
            };

            match relative_asset_path(sidecar, output_dir) {
                Some(path) => entries.push(ManifestEntry { metadata, path }),
                None => {
                    warn!(sidecar = %sidecar.display(), "Sidecar outside output root; skipping");
                }
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let manifest = Manifest::new(entries);
        let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

        info!(
            manifest = %manifest_path.display(),
            assets = manifest.asset_count,
            "Generated asset manifest"
        );
        Ok(manifest_path)
    }

    fn read_record(sidecar: &Path) -> ManifestResult<AssetMetadata> {
        let text = fs::read_to_string(sidecar)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Output-relative path of the asset a sidecar describes
///
/// The sidecar extension is stripped and components are joined with `/` so
/// manifests compare equal across platforms.
fn relative_asset_path(sidecar: &Path, root: &Path) -> Option<String> {
    let rel = sidecar.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
