//! Manifest document aggregating cooked asset metadata
//!
//! The manifest is a derived view over the sidecars of an output tree, never
//! authoritative state: it is fully regenerated on each build and the file
//! itself is excluded from aggregation.

use serde::{Deserialize, Serialize};

use crate::metadata::AssetMetadata;

/// File name of the manifest inside an output root
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Current manifest format version
pub const MANIFEST_VERSION: &str = "1.0";

/// One aggregated asset record: its metadata plus the output-relative path
/// of the cooked file (extension stripped)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(flatten)]
    pub metadata: AssetMetadata,
    pub path: String,
}

/// Aggregate of all metadata records under an output root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub asset_count: usize,
    pub assets: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest from collected entries
    ///
    /// `asset_count` is derived from the entry list here, which is the only
    /// place it is ever set; the two cannot disagree.
    pub fn new(assets: Vec<ManifestEntry>) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            asset_count: assets.len(),
            assets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShaderStage;

    fn shader_entry(path: &str) -> ManifestEntry {
        ManifestEntry {
            metadata: AssetMetadata::Shader {
                shader_type: ShaderStage::Vertex,
                source: format!("assets/{path}.vert"),
                defines: vec![],
                includes: vec![],
            },
            path: path.to_string(),
        }
    }

    #[test]
    fn test_count_matches_entries() {
        let manifest = Manifest::new(vec![shader_entry("a"), shader_entry("sub/b")]);
        assert_eq!(manifest.asset_count, manifest.assets.len());
        assert_eq!(manifest.version, MANIFEST_VERSION);
    }

    #[test]
    fn test_entry_flattens_metadata() {
        let json = serde_json::to_value(shader_entry("shaders/basic")).unwrap();
        // Flattened record: type tag and path are siblings, no nesting
        assert_eq!(json["type"], "shader");
        assert_eq!(json["shader_type"], "vertex");
        assert_eq!(json["path"], "shaders/basic");
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_manifest_round_trip() {
        let manifest = Manifest::new(vec![shader_entry("a")]);
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
