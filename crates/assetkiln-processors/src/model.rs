//! Model cooking: verified pass-through copy.
//!
//! No format transcoding happens yet; a real mesh-import step would slot in
//! here. The current contract is a byte-for-byte copy (size-checked after
//! the write) plus a metadata record whose animation/material/mesh lists
//! stay empty until import is implemented.

use std::fs;
use std::path::Path;

use tracing::debug;

use assetkiln_core::{AssetKind, AssetMetadata};

use crate::traits::{
    ensure_parent_dir, extension_tag, write_metadata, AssetProcessor, ProcessError, ProcessResult,
};

/// Processor for 3D model assets
#[derive(Debug, Default)]
pub struct ModelProcessor;

impl ModelProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetProcessor for ModelProcessor {
    fn name(&self) -> &'static str {
        "model"
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Model
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["obj", "gltf", "glb", "fbx"]
    }

    fn process(&self, input: &Path, output: &Path) -> ProcessResult<AssetMetadata> {
        ensure_parent_dir(output)?;

        let expected = fs::metadata(input)?.len();
        let written = fs::copy(input, output)?;
        if written != expected {
            return Err(ProcessError::CopyMismatch { expected, written });
        }

        let metadata = AssetMetadata::Model {
            format: extension_tag(input),
            source: input.display().to_string(),
            animations: Vec::new(),
            materials: Vec::new(),
            meshes: Vec::new(),
        };
        write_metadata(output, &metadata)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            bytes = written,
            "Cooked model"
        );
        Ok(metadata)
    }
}
