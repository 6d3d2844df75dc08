//! Shader cooking: identity text copy with stage classification.
//!
//! Compilation is external to the pipeline; the cooked output is the source
//! text unchanged. The metadata records the pipeline stage derived from the
//! extension along with empty define/include lists.

use std::fs;
use std::path::Path;

use tracing::debug;

use assetkiln_core::{AssetKind, AssetMetadata, ShaderStage};

use crate::traits::{
    ensure_parent_dir, extension_tag, write_metadata, AssetProcessor, ProcessResult,
};

/// Processor for shader source assets
#[derive(Debug, Default)]
pub struct ShaderProcessor;

impl ShaderProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetProcessor for ShaderProcessor {
    fn name(&self) -> &'static str {
        "shader"
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Shader
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["vert", "frag", "geom", "tesc", "tese", "comp"]
    }

    fn process(&self, input: &Path, output: &Path) -> ProcessResult<AssetMetadata> {
        let source_text = fs::read_to_string(input)?;

        ensure_parent_dir(output)?;
        fs::write(output, &source_text)?;

        let stage = ShaderStage::from_extension(&extension_tag(input));
        let metadata = AssetMetadata::Shader {
            shader_type: stage,
            source: input.display().to_string(),
            defines: Vec::new(),
            includes: Vec::new(),
        };
        write_metadata(output, &metadata)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            stage = %stage,
            "Cooked shader"
        );
        Ok(metadata)
    }
}
