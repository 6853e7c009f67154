//! Symlink handling: file links are hashed through, others are skipped

#![cfg(unix)]

use super::test_utils::{manifest_paths, write_file};
use dirsum::tree::hasher::compute_content_checksum;
use dirsum::{generate, IgnoreSpec, ManifestBuilder};
use std::path::Path;
use std::os::unix::fs::symlink;
use tempfile::TempDir;

#[test]
fn test_file_symlink_hashes_target_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "real.txt", b"payload");
    symlink(root.join("real.txt"), root.join("alias.txt")).unwrap();

    let manifest = ManifestBuilder::new(IgnoreSpec::empty()).build(root).unwrap();

    assert_eq!(manifest_paths(&manifest), vec!["alias.txt", "real.txt"]);
    let expected = compute_content_checksum(b"payload");
    assert_eq!(manifest.checksum_of("alias.txt"), Some(expected.as_str()));
}

#[test]
fn test_directory_symlink_not_followed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "data/file.txt", b"x");
    symlink(root.join("data"), root.join("mirror")).unwrap();

    let manifest = ManifestBuilder::new(IgnoreSpec::empty()).build(root).unwrap();

    assert_eq!(manifest_paths(&manifest), vec!["data/file.txt"]);
}

#[test]
fn test_dangling_symlink_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "a.txt", b"a");
    symlink(root.join("gone.txt"), root.join("dangling")).unwrap();

    let manifest = ManifestBuilder::new(IgnoreSpec::empty()).build(root).unwrap();

    assert_eq!(manifest_paths(&manifest), vec!["a.txt"]);
}

#[test]
fn test_symlinked_root_is_scanned() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    write_file(&real, "a.txt", b"hello");
    let link = temp_dir.path().join("link");
    symlink(&real, &link).unwrap();

    let summary = generate(&link, Path::new("checksums.json"), IgnoreSpec::empty()).unwrap();

    assert_eq!(manifest_paths(&summary.manifest), vec!["a.txt"]);
    assert!(real.join("checksums.json").exists());
}
