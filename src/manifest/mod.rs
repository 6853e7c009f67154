//! Checksum manifests
//!
//! A run is a linear pipeline: walk the root, skip ignored paths, hash each
//! remaining regular file, collect the entries, and persist them as JSON.

pub mod builder;
pub mod writer;

pub use builder::ManifestBuilder;
pub use writer::{save_to_file, to_pretty_json};

use crate::error::ManifestError;
use crate::ignore::IgnoreSpec;
use crate::tree::path::resolve_root;
use crate::types::Manifest;
use std::path::{Path, PathBuf};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub root: PathBuf,
    pub output: PathBuf,
    pub manifest: Manifest,
}

/// Compute the manifest for `dir` and write it to `output` (resolved against
/// the absolute root).
///
/// Nothing is written unless the whole tree was walked and hashed.
pub fn generate(
    dir: &Path,
    output: &Path,
    ignore: IgnoreSpec,
) -> Result<RunSummary, ManifestError> {
    let root = resolve_root(dir)?;
    let manifest = ManifestBuilder::new(ignore).build(&root)?;
    let output = root.join(output);
    save_to_file(&manifest, &output)?;
    Ok(RunSummary {
        root,
        output,
        manifest,
    })
}
