//! Test utilities for pyembed-lib.
//!
//! Helpers for laying out fake runtime installations and redistributable trees
//! inside temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Create an empty file at `path`, creating parent directories as needed.
pub fn touch(path: &Path) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, b"").unwrap();
}

/// Lay out a runtime home under `root` with the marker header in `header_dir`
/// and one empty file per name in `libs` under `libs/`.
pub fn fake_runtime(root: &Path, header_dir: &str, marker: &str, libs: &[&str]) -> PathBuf {
  fs::create_dir_all(root).unwrap();
  touch(&root.join(header_dir).join(marker));
  for lib in libs {
    touch(&root.join("libs").join(lib));
  }
  dunce::canonicalize(root).unwrap()
}
