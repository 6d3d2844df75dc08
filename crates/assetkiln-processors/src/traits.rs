//! Core trait defining the conversion contract for all asset categories.
//!
//! A processor owns one category: it declares the extensions it claims,
//! converts a single input file to the cooked output path, and emits the
//! metadata sidecar next to the output. Failures stay at this boundary —
//! processing one file never aborts a tree walk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use assetkiln_core::{sidecar_path, AssetKind, AssetMetadata};

/// Errors that can occur while cooking a single asset
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Copy size mismatch: wrote {written} bytes, source is {expected}")]
    CopyMismatch { expected: u64, written: u64 },

    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Result type alias for processor operations
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Conversion contract implemented by each asset category
pub trait AssetProcessor: Send + Sync {
    /// Human-readable processor name for logs
    fn name(&self) -> &'static str;

    /// Category of asset this processor produces
    fn kind(&self) -> AssetKind;

    /// Extensions this processor claims (lowercase, without the dot)
    fn extensions(&self) -> &'static [&'static str];

    /// Whether this processor handles the given file, by extension
    fn can_process(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions().iter().any(|claimed| *claimed == ext)
            })
    }

    /// Convert `input` into a cooked file at `output` and write its sidecar
    ///
    /// Returns the metadata that was written. Parent directories of `output`
    /// are created as needed.
    fn process(&self, input: &Path, output: &Path) -> ProcessResult<AssetMetadata>;
}

/// Serialize a metadata record to the sidecar co-located with `output`
///
/// Sidecars are UTF-8 JSON with 2-space indentation. Returns the sidecar
/// path that was written.
pub fn write_metadata(output: &Path, metadata: &AssetMetadata) -> ProcessResult<PathBuf> {
    let path = sidecar_path(output);
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Create the parent directories of an output path
///
/// Idempotent: succeeds if they already exist, safe under concurrent
/// creation by parallel cook workers.
pub(crate) fn ensure_parent_dir(output: &Path) -> ProcessResult<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Lowercase extension of a path without the dot, for metadata format tags
pub(crate) fn extension_tag(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProcessor;

    impl AssetProcessor for StubProcessor {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn kind(&self) -> AssetKind {
            AssetKind::Model
        }

        fn extensions(&self) -> &'static [&'static str] {
            &["obj", "gltf"]
        }

        fn process(&self, _input: &Path, _output: &Path) -> ProcessResult<AssetMetadata> {
            unimplemented!("not exercised by these tests")
        }
    }

    #[test]
    fn test_can_process_matches_claimed_extensions() {
        let p = StubProcessor;
        assert!(p.can_process(Path::new("meshes/ship.obj")));
        assert!(p.can_process(Path::new("meshes/ship.gltf")));
        assert!(!p.can_process(Path::new("meshes/ship.fbx")));
    }

    #[test]
    fn test_can_process_is_case_insensitive() {
        let p = StubProcessor;
        assert!(p.can_process(Path::new("SHIP.OBJ")));
        assert!(p.can_process(Path::new("Ship.Gltf")));
    }

    #[test]
    fn test_can_process_requires_extension() {
        let p = StubProcessor;
        assert!(!p.can_process(Path::new("Makefile")));
        assert!(!p.can_process(Path::new("obj")));
    }

    #[test]
    fn test_extension_tag() {
        assert_eq!(extension_tag(Path::new("a/b/model.GLB")), "glb");
        assert_eq!(extension_tag(Path::new("noext")), "");
    }
}
