//! Content checksums using SHA-1
//!
//! The algorithm is fixed. Only determinism and content sensitivity are
//! required of it, not collision resistance.

use crate::error::ManifestError;
use sha1::{Digest, Sha1};
use std::io;
use std::path::Path;

/// Length of a rendered checksum: 160 bits as lowercase hex
pub const CHECKSUM_HEX_LEN: usize = 40;

/// Source of file contents for hashing.
///
/// Production code reads from disk; tests can supply contents from memory.
pub trait ContentReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads whole files from the local filesystem (links are followed)
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Compute the lowercase hex SHA-1 of a byte buffer
pub fn compute_content_checksum(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Read a file in full and compute its checksum
pub fn checksum_file<R: ContentReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<String, ManifestError> {
    let data = reader.read(path).map_err(|e| ManifestError::Checksum {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(compute_content_checksum(&data))
}

/// Whether a string has the shape of a rendered checksum
pub fn is_checksum_string(s: &str) -> bool {
    s.len() == CHECKSUM_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
