//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;

/// Create `relative` under `root` with `content`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Relative paths of a manifest, in order
pub fn manifest_paths(manifest: &dirsum::Manifest) -> Vec<String> {
    manifest.entries().iter().map(|e| e.path.clone()).collect()
}
