//! Path utilities for test asset directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Writes a fake asset file of `len` bytes into `dir` and returns its path.
pub fn write_asset(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    fs::write(&path, bytes).expect("Failed to write test asset");
    path
}

/// Writes a text file (e.g. YAML config) into `dir` and returns its path.
pub fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_asset() {
        let dir = temp_test_dir();
        let path = write_asset(dir.path(), "base.png", 300);
        assert_eq!(fs::read(path).unwrap().len(), 300);
    }
}
