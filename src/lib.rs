//! Dirsum: checksum manifests for directory trees
//!
//! Walks a root directory, skips paths matching an ignore prefix list, hashes
//! every remaining regular file with SHA-1, and writes the ordered
//! `(path, checksum)` list as pretty-printed JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;

pub use error::{AppError, ManifestError};
pub use ignore::IgnoreSpec;
pub use manifest::{generate, ManifestBuilder, RunSummary};
pub use types::{ChecksumEntry, EntryKind, Manifest, Visit};
