//! Root resolution and root-relative path rendering

use crate::error::ManifestError;
use std::path::{Component, Path, PathBuf};

/// Resolve the scan root to an absolute path.
///
/// Relative paths are joined onto the current directory and `.`/`..`
/// components are removed lexically. The directory need not exist yet; a
/// missing root surfaces later as a traversal error.
pub fn resolve_root(dir: &Path) -> Result<PathBuf, ManifestError> {
    let absolute = std::path::absolute(dir).map_err(|e| ManifestError::PathResolution {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(dunce::simplified(&normalize_lexically(&absolute)).to_path_buf())
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render `path` relative to `root`, joining components with `/`.
///
/// Returns an empty string for the root itself. Non-UTF-8 components are
/// rendered lossily.
pub fn relative_path_string(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            parts.push(name.to_string_lossy());
        }
    }
    parts.join("/")
}
