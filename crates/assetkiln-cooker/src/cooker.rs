//! Directory-tree cooking.
//!
//! The cooker enumerates regular files under an input root, re-roots each
//! file's relative path under the output root, and dispatches it to the
//! processor claiming its extension. Sidecar files are never treated as raw
//! input, which keeps previously generated metadata from being re-cooked
//! when input and output trees overlap.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{error, info, warn};
use walkdir::WalkDir;

use assetkiln_core::{is_sidecar, AssetMetadata};
use assetkiln_processors::{ProcessError, ProcessorRegistry};

/// Errors that can occur while cooking a single asset
#[derive(Error, Debug)]
pub enum CookError {
    #[error("No processor for extension of {0}")]
    UnresolvedProcessor(PathBuf),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Options governing a tree cook
#[derive(Debug, Clone)]
pub struct CookOptions {
    /// Descend into subdirectories (default) or cook only the immediate
    /// directory
    pub recursive: bool,
    /// Worker count for the cook pass; 1 cooks inline, 0 lets the thread
    /// pool pick
    pub threads: usize,
}

impl Default for CookOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            threads: 1,
        }
    }
}

/// Cancellation handle checked between files
///
/// Cancelling stops the walk cleanly: files already cooked stay on disk,
/// files not yet visited are simply not processed. No output is ever left
/// half-written across files.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the run holding this token
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Success/failure tally of a cook pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookStats {
    pub processed: usize,
    pub failed: usize,
}

impl CookStats {
    /// Files visited in total
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Walks an input tree and dispatches each file through the registry
///
/// The registry is borrowed: it is built once at startup and shared, never
/// owned or mutated by the cooker.
pub struct Cooker<'a> {
    registry: &'a ProcessorRegistry,
    options: CookOptions,
    cancel: CancelToken,
}

impl<'a> Cooker<'a> {
    pub fn new(registry: &'a ProcessorRegistry) -> Self {
        Self::with_options(registry, CookOptions::default())
    }

    pub fn with_options(registry: &'a ProcessorRegistry, options: CookOptions) -> Self {
        Self {
            registry,
            options,
            cancel: CancelToken::new(),
        }
    }

    /// Handle for cancelling this cooker's runs from another thread
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Cook a single asset, reporting success
    ///
    /// All failure causes — unclaimed extension, I/O, decode — are logged
    /// with source-file context and folded into the boolean so callers can
    /// continue with remaining files.
    pub fn cook_one(&self, input: &Path, output: &Path) -> bool {
        match self.try_cook_one(input, output) {
            Ok(metadata) => {
                info!(
                    kind = %metadata.kind(),
                    input = %input.display(),
                    output = %output.display(),
                    "Processed asset"
                );
                true
            }
            Err(CookError::UnresolvedProcessor(_)) => {
                warn!(input = %input.display(), "No processor found");
                false
            }
            Err(CookError::Process(e)) => {
                error!(input = %input.display(), error = %e, "Failed to cook asset");
                false
            }
        }
    }

    /// Cook a single asset, surfacing the error kind
    pub fn try_cook_one(&self, input: &Path, output: &Path) -> Result<AssetMetadata, CookError> {
        let processor = self
            .registry
            .resolve(input)
            .ok_or_else(|| CookError::UnresolvedProcessor(input.to_path_buf()))?;
        Ok(processor.process(input, output)?)
    }

    /// Cook every non-sidecar regular file under `input_dir` into
    /// `output_dir`, preserving relative directory structure
    ///
    /// Individual failures are counted, never fatal; the returned stats
    /// satisfy `processed + failed == enumerated files` unless the run is
    /// cancelled part-way.
    pub fn cook_tree(&self, input_dir: &Path, output_dir: &Path) -> CookStats {
        let mut stats = CookStats::default();
        let jobs = self.collect_jobs(input_dir, output_dir, &mut stats);

        if self.options.threads == 1 {
            self.cook_serial(&jobs, &mut stats);
        } else {
            self.cook_parallel(&jobs, &mut stats);
        }

        info!(
            input = %input_dir.display(),
            processed = stats.processed,
            failed = stats.failed,
            "Cook pass complete"
        );
        stats
    }

    /// Enumerate input files and pair each with its re-rooted output path
    fn collect_jobs(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        stats: &mut CookStats,
    ) -> Vec<(PathBuf, PathBuf)> {
        let mut walker = WalkDir::new(input_dir);
        if !self.options.recursive {
            walker = walker.max_depth(1);
        }

        let mut jobs = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let input = entry.into_path();
            if is_sidecar(&input) {
                continue;
            }
            match input.strip_prefix(input_dir) {
                Ok(rel) => {
                    let output = output_dir.join(rel);
                    jobs.push((input, output));
                }
                Err(_) => {
                    // WalkDir yields paths under its root, so this is
                    // unreachable in practice; count it rather than lose it.
                    error!(input = %input.display(), "Path escapes input root");
                    stats.failed += 1;
                }
            }
        }
        jobs
    }

    fn cook_serial(&self, jobs: &[(PathBuf, PathBuf)], stats: &mut CookStats) {
        for (input, output) in jobs {
            if self.cancel.is_cancelled() {
                warn!("Cook cancelled; stopping tree walk");
                break;
            }
            if self.cook_one(input, output) {
                stats.processed += 1;
            } else {
                stats.failed += 1;
            }
        }
    }

    fn cook_parallel(&self, jobs: &[(PathBuf, PathBuf)], stats: &mut CookStats) {
        let processed = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        let run = || {
            jobs.par_iter().for_each(|(input, output)| {
                if self.cancel.is_cancelled() {
                    return;
                }
                if self.cook_one(input, output) {
                    processed.fetch_add(1, Ordering::Relaxed);
                } else {
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            });
        };

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
        {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(error = %e, "Could not build worker pool; cooking on current thread");
                run();
            }
        }

        stats.processed += processed.into_inner();
        stats.failed += failed.into_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cook_one_reports_unresolved_extension() {
        let registry = ProcessorRegistry::with_default_processors();
        let cooker = Cooker::new(&registry);
        let dir = tempdir().unwrap();
        let input = dir.path().join("c.xyz");
        fs::write(&input, b"?").unwrap();

        assert!(!cooker.cook_one(&input, &dir.path().join("out/c.xyz")));
        let err = cooker
            .try_cook_one(&input, &dir.path().join("out/c.xyz"))
            .unwrap_err();
        assert!(matches!(err, CookError::UnresolvedProcessor(_)));
    }

    #[test]
    fn test_cancelled_run_returns_partial_counts() {
        let registry = ProcessorRegistry::with_default_processors();
        let cooker = Cooker::new(&registry);
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.frag"), "void main() {}\n").unwrap();
        fs::write(dir.path().join("b.frag"), "void main() {}\n").unwrap();

        cooker.cancel_token().cancel();
        let stats = cooker.cook_tree(dir.path(), &dir.path().join("out"));

        assert_eq!(stats, CookStats::default());
        assert!(!dir.path().join("out").join("a.frag").exists());
    }

    #[test]
    fn test_sidecars_are_not_enumerated() {
        let registry = ProcessorRegistry::with_default_processors();
        let cooker = Cooker::new(&registry);
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::write(dir.path().join("a.frag"), "void main() {}\n").unwrap();
        fs::write(dir.path().join("a.json"), "{\"type\":\"shader\"}").unwrap();
        fs::write(dir.path().join("b.JSON"), "{}").unwrap();

        let stats = cooker.cook_tree(dir.path(), &out);

        assert_eq!(stats.processed, 1);
        assert_eq!(stats.failed, 0);
    }
}
