//! assetkiln-processors
//!
//! Per-category conversion of raw asset files into cooked outputs plus
//! metadata sidecars, and the extension registry that dispatches to them.
//!
//! # Supported Categories
//!
//! | Category | Extensions | Conversion |
//! |----------|------------|------------|
//! | Texture  | `.png .jpg .jpeg .bmp .tga` | decode, force RGBA8, lossless PNG re-encode |
//! | Model    | `.obj .gltf .glb .fbx` | verified pass-through copy |
//! | Audio    | `.wav .mp3 .ogg .flac` | verified pass-through copy |
//! | Shader   | `.vert .frag .geom .tesc .tese .comp` | identity text copy |
//!
//! Each processor writes the cooked file and its sidecar in one
//! [`AssetProcessor::process`] call; any I/O or decode failure is returned as
//! a [`ProcessError`] so callers can keep cooking the rest of a tree.

pub mod audio;
pub mod model;
pub mod registry;
pub mod shader;
pub mod texture;
pub mod traits;

pub use audio::AudioProcessor;
pub use model::ModelProcessor;
pub use registry::ProcessorRegistry;
pub use shader::ShaderProcessor;
pub use texture::TextureProcessor;
pub use traits::{write_metadata, AssetProcessor, ProcessError, ProcessResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
