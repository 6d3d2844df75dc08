//! assetkiln-cooker
//!
//! Orchestration layer of the cooking pipeline: walks an input tree,
//! dispatches each file to its processor through the registry, preserves
//! relative path structure in the output tree, and tallies success/failure.
//! After a cook pass, the manifest builder aggregates the emitted sidecars
//! into a single manifest document.
//!
//! Per-file failures never abort a run — the walk always completes and the
//! caller decides exit semantics from the final counts.

pub mod cooker;
pub mod manifest;

pub use cooker::{CancelToken, CookError, CookOptions, CookStats, Cooker};
pub use manifest::{ManifestBuilder, ManifestError, ManifestResult};
