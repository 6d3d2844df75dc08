//! Audio cooking: verified pass-through copy.
//!
//! Same contract as model cooking — raw copy plus schema emission — with
//! duration, channel count, sample rate, and bit depth zeroed until real
//! audio decoding is integrated.

use std::fs;
use std::path::Path;

use tracing::debug;

use assetkiln_core::{AssetKind, AssetMetadata};

use crate::traits::{
    ensure_parent_dir, extension_tag, write_metadata, AssetProcessor, ProcessError, ProcessResult,
};

/// Processor for audio assets
#[derive(Debug, Default)]
pub struct AudioProcessor;

impl AudioProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl AssetProcessor for AudioProcessor {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Audio
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["wav", "mp3", "ogg", "flac"]
    }

    fn process(&self, input: &Path, output: &Path) -> ProcessResult<AssetMetadata> {
        ensure_parent_dir(output)?;

        let expected = fs::metadata(input)?.len();
        let written = fs::copy(input, output)?;
        if written != expected {
            return Err(ProcessError::CopyMismatch { expected, written });
        }

        let metadata = AssetMetadata::Audio {
            format: extension_tag(input),
            source: input.display().to_string(),
            duration: 0.0,
            channels: 0,
            sample_rate: 0,
            bit_depth: 0,
        };
        write_metadata(output, &metadata)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            bytes = written,
            "Cooked audio"
        );
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_and_zeroed_metadata() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("engine.wav");
        let output = dir.path().join("cooked").join("engine.wav");
        fs::write(&input, b"RIFF....WAVE").unwrap();

        let metadata = AudioProcessor::new().process(&input, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"RIFF....WAVE");
        match metadata {
            AssetMetadata::Audio {
                format,
                duration,
                channels,
                sample_rate,
                bit_depth,
                ..
            } => {
                assert_eq!(format, "wav");
                assert_eq!(duration, 0.0);
                assert_eq!(channels, 0);
                assert_eq!(sample_rate, 0);
                assert_eq!(bit_depth, 0);
            }
            other => panic!("expected audio metadata, got {other:?}"),
        }
    }

    #[test]
    fn test_sidecar_addressable_by_extension_swap() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("music.ogg");
        let output = dir.path().join("out").join("music.ogg");
        fs::write(&input, b"OggS").unwrap();

        AudioProcessor::new().process(&input, &output).unwrap();

        assert!(dir.path().join("out").join("music.json").is_file());
    }
}
