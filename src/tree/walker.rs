//! Filesystem walker for traversing directory structures
//!
//! Depth-first, sorted by file name at every level. Ignored directories are
//! pruned before they are opened. The first error ends the walk.

use crate::error::ManifestError;
use crate::ignore::IgnoreSpec;
use crate::tree::path::relative_path_string;
use crate::types::{EntryKind, Visit};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, FilterEntry, WalkDir};

type PrunePredicate = Box<dyn FnMut(&DirEntry) -> bool>;

/// Filesystem walker
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    ignore: IgnoreSpec,
}

impl Walker {
    /// Create a walker for the given root that ignores nothing
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore: IgnoreSpec::empty(),
        }
    }

    /// Create a walker that prunes paths matching `ignore`
    pub fn with_ignore(root: PathBuf, ignore: IgnoreSpec) -> Self {
        Self { root, ignore }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily visit every non-ignored entry below the root.
    ///
    /// The root itself is not yielded. Symlinks are reported, never descended.
    pub fn visits(&self) -> Visits {
        let root = self.root.clone();
        let ignore = self.ignore.clone();
        let prune_root = root.clone();
        let keep: PrunePredicate = Box::new(move |entry: &DirEntry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = relative_path_string(&prune_root, entry.path());
            if ignore.is_ignored(&relative) {
                if entry.file_type().is_dir() {
                    debug!(path = %relative, "Pruning ignored directory");
                } else {
                    debug!(path = %relative, "Skipping ignored entry");
                }
                return false;
            }
            true
        });

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(keep);

        Visits {
            root,
            inner,
            done: false,
        }
    }

    /// Walk the whole tree and collect visits, failing on the first error
    pub fn walk(&self) -> Result<Vec<Visit>, ManifestError> {
        self.visits().collect()
    }
}

/// Iterator over the entries of a walk. Fused after the first error.
pub struct Visits {
    root: PathBuf,
    inner: FilterEntry<walkdir::IntoIter, PrunePredicate>,
    done: bool,
}

impl Iterator for Visits {
    type Item = Result<Visit, ManifestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.done = true;
                    return Some(Err(ManifestError::from_walk(e, &self.root)));
                }
            };

            if entry.depth() == 0 {
                if !is_directory_root(&entry) {
                    self.done = true;
                    return Some(Err(ManifestError::Traversal {
                        path: self.root.clone(),
                        source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                    }));
                }
                continue;
            }

            if entry.path().to_str().is_none() {
                warn!(path = ?entry.path(), "Non-UTF-8 path rendered lossily");
            }

            return Some(Ok(Visit {
                relative: relative_path_string(&self.root, entry.path()),
                kind: classify(&entry),
                path: entry.into_path(),
            }));
        }
    }
}

/// The root may itself be a symlink; walkdir descends through it regardless.
fn is_directory_root(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    entry.path_is_symlink()
        && std::fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
}

fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        match std::fs::metadata(entry.path()) {
            Ok(target) if target.is_file() => EntryKind::FileLink,
            Ok(target) if target.is_dir() => EntryKind::DirectoryLink,
            Ok(_) => EntryKind::Special,
            Err(_) => EntryKind::BrokenLink,
        }
    } else {
        EntryKind::Special
    }
}
