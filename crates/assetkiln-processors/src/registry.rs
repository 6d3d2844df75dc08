//! Extension-to-processor lookup table.
//!
//! The registry is an explicit, immutable table built once at startup and
//! passed by reference into the cooker — there is no process-wide state.
//! Resolution walks the registration order, so when two processors claim the
//! same extension the earlier registration wins; the collision is logged at
//! registration time.

use std::path::Path;

use tracing::warn;

use crate::audio::AudioProcessor;
use crate::model::ModelProcessor;
use crate::shader::ShaderProcessor;
use crate::texture::TextureProcessor;
use crate::traits::AssetProcessor;

/// Ordered table of registered processors
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn AssetProcessor>>,
}

impl ProcessorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Create a registry with the four built-in processors
    pub fn with_default_processors() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextureProcessor::new()));
        registry.register(Box::new(ModelProcessor::new()));
        registry.register(Box::new(AudioProcessor::new()));
        registry.register(Box::new(ShaderProcessor::new()));
        registry
    }

    /// Append a processor to the table
    ///
    /// Extension ownership is expected to be unique; an overlap keeps the
    /// earlier owner and is reported here so a misconfigured custom table
    /// surfaces without turning startup into a failure point.
    pub fn register(&mut self, processor: Box<dyn AssetProcessor>) {
        for ext in processor.extensions() {
            if let Some(owner) = self.owner_of(ext) {
                warn!(
                    extension = *ext,
                    owner = owner.name(),
                    ignored = processor.name(),
                    "Extension already claimed; earlier registration wins"
                );
            }
        }
        self.processors.push(processor);
    }

    /// Find the processor claiming this path's extension, if any
    ///
    /// Matching is case-insensitive. An unclaimed extension is not an error
    /// at this layer; the caller decides how to treat the `None`.
    pub fn resolve(&self, path: &Path) -> Option<&dyn AssetProcessor> {
        self.processors
            .iter()
            .find(|p| p.can_process(path))
            .map(|p| p.as_ref())
    }

    /// Processor currently owning an extension (lowercase, no dot)
    fn owner_of(&self, ext: &str) -> Option<&dyn AssetProcessor> {
        self.processors
            .iter()
            .find(|p| p.extensions().iter().any(|claimed| *claimed == ext))
            .map(|p| p.as_ref())
    }

    /// Number of registered processors
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_default_processors()
    }
}
