//! Core data types: manifest entries and visited filesystem entries.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One hashed file: its root-relative path and lowercase hex SHA-1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumEntry {
    pub path: String,
    pub checksum: String,
}

/// Ordered sequence of checksum entries produced by a single run.
///
/// Order is traversal visitation order. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ChecksumEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChecksumEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChecksumEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the checksum recorded for a relative path
    pub fn checksum_of(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.checksum.as_str())
    }
}

impl From<Vec<ChecksumEntry>> for Manifest {
    fn from(entries: Vec<ChecksumEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Manifest {
    type Item = ChecksumEntry;
    type IntoIter = std::vec::IntoIter<ChecksumEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// What a visited entry is, as reported by the walk (links are not followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory (never produces a manifest entry)
    Directory,
    /// Symlink whose target is a regular file
    FileLink,
    /// Symlink whose target is a directory
    DirectoryLink,
    /// Symlink whose target cannot be resolved
    BrokenLink,
    /// FIFO, socket, device, or anything else
    Special,
}

/// A single entry produced by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated
    pub relative: String,
    pub kind: EntryKind,
}
