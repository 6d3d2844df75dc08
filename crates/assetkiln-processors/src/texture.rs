//! Texture cooking: decode, normalize to RGBA8, re-encode losslessly.
//!
//! Whatever the source color representation, the cooked output is always
//! four-channel RGBA8 PNG data written to the output path. Mipmap generation
//! is recorded as desired in the metadata but not yet performed here.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use assetkiln_core::{AssetKind, AssetMetadata};

use crate::traits::{ensure_parent_dir, write_metadata, AssetProcessor, ProcessResult};

/// Processor for image assets
#[derive(Debug, Default)]
pub struct TextureProcessor;

impl TextureProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetProcessor for TextureProcessor {
    fn name(&self) -> &'static str {
        "texture"
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Texture
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["png", "jpg", "jpeg", "bmp", "tga"]
    }

    fn process(&self, input: &Path, output: &Path) -> ProcessResult<AssetMetadata> {
        // Decode failures (corrupt file, unsupported encoding) surface as
        // recoverable errors, not a run abort.
        let decoded = image::open(input)?;
        let rgba = match decoded {
            DynamicImage::ImageRgba8(img) => img,
            other => other.to_rgba8(),
        };
        let (width, height) = rgba.dimensions();

        ensure_parent_dir(output)?;
        DynamicImage::ImageRgba8(rgba).save_with_format(output, ImageFormat::Png)?;

        let metadata = AssetMetadata::Texture {
            format: "rgba8".to_string(),
            width,
            height,
            channels: 4,
            mipmaps: true,
            source: input.display().to_string(),
        };
        write_metadata(output, &metadata)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            width,
            height,
            "Cooked texture"
        );
        Ok(metadata)
    }
}
