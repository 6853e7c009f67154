//! Manifest persistence: pretty JSON written atomically

use crate::error::ManifestError;
use crate::types::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialize a manifest as 2-space indented JSON
pub fn to_pretty_json(manifest: &Manifest) -> Result<Vec<u8>, ManifestError> {
    Ok(serde_json::to_vec_pretty(manifest)?)
}

/// Write the manifest to `path`.
///
/// Uses atomic writes (write to .tmp, then rename): either the complete
/// manifest lands at `path` or the previous file is left untouched.
pub fn save_to_file(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let serialized = to_pretty_json(manifest)?;
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, &serialized).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ManifestError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(&temp_path);
        ManifestError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!(path = %path.display(), entries = manifest.len(), "Checksums saved");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
