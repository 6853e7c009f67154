//! Manifest builder: filter, hash, and collect visited entries

use crate::error::ManifestError;
use crate::ignore::IgnoreSpec;
use crate::tree::hasher::{checksum_file, ContentReader, FsReader};
use crate::tree::walker::Walker;
use crate::types::{ChecksumEntry, EntryKind, Manifest, Visit};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds a checksum manifest for a directory tree.
///
/// Generic over the content source so tests can hash from memory.
#[derive(Debug, Clone)]
pub struct ManifestBuilder<R = FsReader> {
    ignore: IgnoreSpec,
    reader: R,
}

impl ManifestBuilder<FsReader> {
    /// Builder that reads file contents from disk
    pub fn new(ignore: IgnoreSpec) -> Self {
        Self {
            ignore,
            reader: FsReader,
        }
    }
}

impl<R: ContentReader> ManifestBuilder<R> {
    /// Builder with a custom content source
    pub fn with_reader(ignore: IgnoreSpec, reader: R) -> Self {
        Self { ignore, reader }
    }

    pub fn ignore(&self) -> &IgnoreSpec {
        &self.ignore
    }

    /// Walk `root` and hash every non-ignored regular file beneath it.
    ///
    /// All-or-nothing: any traversal or read failure discards the partial
    /// manifest and returns the error.
    pub fn build(&self, root: &Path) -> Result<Manifest, ManifestError> {
        info!(root = %root.display(), ignore = ?self.ignore.prefixes(), "Calculating checksums");
        let walker = Walker::with_ignore(root.to_path_buf(), self.ignore.clone());
        let manifest = self.build_from(walker.visits())?;
        info!(entries = manifest.len(), "Checksums calculated");
        Ok(manifest)
    }

    /// Build a manifest from any stream of visits.
    ///
    /// Visits whose relative path matches the ignore spec are skipped here as
    /// well, so streams that were not pruned at the source produce the same
    /// output. Two visits that render to the same relative path (possible
    /// only for non-UTF-8 names) are a `Traversal` error.
    pub fn build_from<I>(&self, visits: I) -> Result<Manifest, ManifestError>
    where
        I: IntoIterator<Item = Result<Visit, ManifestError>>,
    {
        let mut manifest = Manifest::new();
        let mut seen = HashSet::new();

        for visit in visits {
            let visit = visit?;
            if self.ignore.is_ignored(&visit.relative) {
                continue;
            }
            if !seen.insert(visit.relative.clone()) {
                return Err(ManifestError::Traversal {
                    path: visit.path,
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("duplicate manifest path {:?}", visit.relative),
                    ),
                });
            }

            match visit.kind {
                EntryKind::Directory => continue,
                EntryKind::File | EntryKind::FileLink => {
                    let checksum = checksum_file(&self.reader, &visit.path)?;
                    debug!(path = %visit.relative, %checksum, "Hashed file");
                    manifest.push(ChecksumEntry {
                        path: visit.relative,
                        checksum,
                    });
                }
                EntryKind::DirectoryLink => {
                    warn!(path = %visit.relative, "Skipping symlink to directory");
                }
                EntryKind::BrokenLink => {
                    warn!(path = %visit.relative, "Skipping dangling symlink");
                }
                EntryKind::Special => {
                    debug!(path = %visit.relative, "Skipping special file");
                }
            }
        }

        Ok(manifest)
    }
}
