//! Per-asset metadata records
//!
//! Every successful cook emits exactly one metadata record next to the
//! cooked file, sharing its base name with the extension swapped for
//! [`METADATA_EXTENSION`]. Records are written once and overwritten wholesale
//! when the same output path is cooked again.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{AssetKind, ShaderStage};

/// Extension of metadata sidecar files (without the dot)
pub const METADATA_EXTENSION: &str = "json";

/// Metadata record emitted alongside a cooked asset
///
/// Serializes with a `type` tag followed by the category-specific fields,
/// which is the sidecar JSON schema on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetMetadata {
    Texture {
        /// Pixel format of the cooked image
        format: String,
        width: u32,
        height: u32,
        channels: u8,
        /// Mipmap generation is desired but not yet performed by the cook
        mipmaps: bool,
        /// Original input path, recorded for traceability
        source: String,
    },
    Model {
        /// Source extension tag (lowercase, no dot)
        format: String,
        source: String,
        /// Placeholders until a real mesh-import step fills them
        animations: Vec<String>,
        materials: Vec<String>,
        meshes: Vec<String>,
    },
    Audio {
        /// Source extension tag (lowercase, no dot)
        format: String,
        source: String,
        /// Zero until real audio decoding is integrated
        duration: f64,
        channels: u16,
        sample_rate: u32,
        bit_depth: u16,
    },
    Shader {
        shader_type: ShaderStage,
        source: String,
        defines: Vec<String>,
        includes: Vec<String>,
    },
}

impl AssetMetadata {
    /// Category this record describes
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetMetadata::Texture { .. } => AssetKind::Texture,
            AssetMetadata::Model { .. } => AssetKind::Model,
            AssetMetadata::Audio { .. } => AssetKind::Audio,
            AssetMetadata::Shader { .. } => AssetKind::Shader,
        }
    }

    /// Original input path recorded at cook time
    pub fn source(&self) -> &str {
        match self {
            AssetMetadata::Texture { source, .. }
            | AssetMetadata::Model { source, .. }
            | AssetMetadata::Audio { source, .. }
            | AssetMetadata::Shader { source, .. } => source,
        }
    }
}

/// Sidecar path for a cooked output file
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension(METADATA_EXTENSION)
}

/// Whether a path carries the metadata sidecar extension
///
/// The comparison is case-insensitive, consistent with how the registry
/// matches asset extensions.
pub fn is_sidecar(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(METADATA_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture_record() -> AssetMetadata {
        AssetMetadata::Texture {
            format: "rgba8".to_string(),
            width: 64,
            height: 64,
            channels: 4,
            mipmaps: true,
            source: "assets/a.png".to_string(),
        }
    }

    #[test]
    fn test_texture_json_shape() {
        let json = serde_json::to_value(texture_record()).unwrap();
        assert_eq!(json["type"], "texture");
        assert_eq!(json["format"], "rgba8");
        assert_eq!(json["width"], 64);
        assert_eq!(json["height"], 64);
        assert_eq!(json["channels"], 4);
        assert_eq!(json["mipmaps"], true);
        assert_eq!(json["source"], "assets/a.png");
    }

    #[test]
    fn test_shader_json_shape() {
        let record = AssetMetadata::Shader {
            shader_type: ShaderStage::Fragment,
            source: "assets/b.frag".to_string(),
            defines: vec![],
            includes: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "shader");
        assert_eq!(json["shader_type"], "fragment");
        assert!(json["defines"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_round_trips_through_tag() {
        let record = texture_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: AssetMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.kind(), AssetKind::Texture);
    }

    #[test]
    fn test_sidecar_path_swaps_extension() {
        assert_eq!(
            sidecar_path(Path::new("out/tex/a.png")),
            PathBuf::from("out/tex/a.json")
        );
    }

    #[test]
    fn test_is_sidecar_case_insensitive() {
        assert!(is_sidecar(Path::new("a.json")));
        assert!(is_sidecar(Path::new("a.JSON")));
        assert!(!is_sidecar(Path::new("a.png")));
        assert!(!is_sidecar(Path::new("json")));
    }
}
