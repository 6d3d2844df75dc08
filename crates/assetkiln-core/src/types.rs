//! Asset category and shader stage definitions
//!
//! These enums classify what a cooked file *is*; the metadata schemas in
//! [`crate::metadata`] hang the per-category fields off them.

use serde::{Deserialize, Serialize};

/// Category of asset a processor produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Texture,
    Model,
    Audio,
    Shader,
}

impl AssetKind {
    /// Lowercase name as it appears in sidecar JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Model => "model",
            AssetKind::Audio => "audio",
            AssetKind::Shader => "shader",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage of a shader source file
///
/// Derived from the source extension. `Unknown` is the safe default for
/// extensions outside the mapping; registry-level filtering means it should
/// not be reachable through a normal cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessellationControl,
    TessellationEvaluation,
    Compute,
    Unknown,
}

impl ShaderStage {
    /// Map a file extension (without the dot, any case) to its stage
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "vert" => ShaderStage::Vertex,
            "frag" => ShaderStage::Fragment,
            "geom" => ShaderStage::Geometry,
            "tesc" => ShaderStage::TessellationControl,
            "tese" => ShaderStage::TessellationEvaluation,
            "comp" => ShaderStage::Compute,
            _ => ShaderStage::Unknown,
        }
    }

    /// Lowercase name as it appears in sidecar JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
            ShaderStage::TessellationControl => "tessellation_control",
            ShaderStage::TessellationEvaluation => "tessellation_evaluation",
            ShaderStage::Compute => "compute",
            ShaderStage::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
