//! Path anchoring for candidate locations.
//!
//! Candidate strings come from config files and environment variables written
//! for either Windows or Unix hosts, so rootedness is decided on the text itself
//! rather than by the host's `Path::is_absolute`.

use std::path::{Component, Path, PathBuf};

/// Returns true if `path` is anchored: a leading `/` or `\` (which also covers
/// UNC `\\server` paths) or a `<DriveLetter>:` prefix.
pub fn is_rooted(path: &str) -> bool {
  let bytes = path.as_bytes();
  path.starts_with('/') || path.starts_with('\\') || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Anchor `path` at `base`.
///
/// Rooted paths are returned as-is. Relative paths are joined onto `base` and
/// normalized lexically; the filesystem is never consulted.
pub fn resolve(path: &str, base: &Path) -> PathBuf {
  if is_rooted(path) {
    return PathBuf::from(path);
  }
  normalize(&base.join(path))
}

/// Normalize a path by resolving `.` and `..` components without requiring the path to exist
pub fn normalize(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::ParentDir => {
        normalized.pop();
      }
      Component::CurDir => {}
      other => normalized.push(other),
    }
  }
  normalized
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rooted_forms() {
    assert!(is_rooted("/opt/python"));
    assert!(is_rooted("\\Python39"));
    assert!(is_rooted("\\\\server\\share\\python"));
    assert!(is_rooted("//server/share"));
    assert!(is_rooted("C:\\Python39"));
    assert!(is_rooted("d:/python"));
    assert!(is_rooted("C:"));

    assert!(!is_rooted("python"));
    assert!(!is_rooted("./python"));
    assert!(!is_rooted("../Resources/python"));
    assert!(!is_rooted("1:/python"));
    assert!(!is_rooted(""));
  }

  #[test]
  #[cfg(not(windows))]
  fn relative_paths_join_base_and_normalize() {
    let base = Path::new("/plugins/embed/Source");
    assert_eq!(
      resolve("../Resources/python_build_dependency", base),
      PathBuf::from("/plugins/embed/Resources/python_build_dependency")
    );
    assert_eq!(resolve("./python", base), PathBuf::from("/plugins/embed/Source/python"));
    assert_eq!(resolve("", base), PathBuf::from("/plugins/embed/Source"));
  }

  #[test]
  fn rooted_paths_are_untouched() {
    let base = Path::new("/ignored");
    assert_eq!(resolve("C:\\Python39", base), PathBuf::from("C:\\Python39"));
    assert_eq!(resolve("/opt/rt", base), PathBuf::from("/opt/rt"));
  }

  #[test]
  fn resolve_is_idempotent() {
    let base = std::env::temp_dir();
    for p in ["python", "./a/../b", "../up", "/opt/rt", "C:\\Python39", "a/./b/c"] {
      let once = resolve(p, &base);
      let twice = resolve(&once.to_string_lossy(), &base);
      assert_eq!(twice, once, "resolve not idempotent for {p:?}");
    }
  }

  #[test]
  #[cfg(not(windows))]
  fn normalize_collapses_dot_segments() {
    assert_eq!(normalize(Path::new("/foo/bar/../baz")), PathBuf::from("/foo/baz"));
    assert_eq!(normalize(Path::new("/foo/./bar")), PathBuf::from("/foo/bar"));
    assert_eq!(normalize(Path::new("/foo/bar/../../baz")), PathBuf::from("/baz"));
    assert_eq!(normalize(Path::new("/../foo")), PathBuf::from("/foo"));
  }
}
