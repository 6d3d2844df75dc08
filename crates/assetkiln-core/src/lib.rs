//! assetkiln Core Library
//!
//! This crate provides the shared data model for the asset cooking
//! pipeline: asset categories, per-asset metadata records, the manifest
//! document, and the sidecar naming conventions the other crates agree on.

pub mod manifest;
pub mod metadata;
pub mod types;

pub use manifest::{Manifest, ManifestEntry, MANIFEST_FILE_NAME, MANIFEST_VERSION};
pub use metadata::{is_sidecar, sidecar_path, AssetMetadata, METADATA_EXTENSION};
pub use types::{AssetKind, ShaderStage};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::manifest::{Manifest, ManifestEntry};
    pub use crate::metadata::AssetMetadata;
    pub use crate::types::{AssetKind, ShaderStage};
}
