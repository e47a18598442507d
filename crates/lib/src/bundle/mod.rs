//! Runtime dependency bundling.
//!
//! Walks the redistributable directory and records every file the embedded
//! runtime loads at run time (shared libraries, compiled extension modules,
//! zipped standard library) as a staging entry next to the produced binary.
//! The walk only builds a manifest; copying is left to the host build.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Error during redistributable enumeration.
#[derive(Debug, Error)]
pub enum BundleError {
  #[error("redistributable directory unavailable: {}: {message}", path.display())]
  RedistDirectoryUnavailable { path: PathBuf, message: String },
}

/// A file staged under the binary output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntry {
  /// Output token joined with the file's base name
  pub destination: PathBuf,
  /// Absolute path of the file inside the redistributable tree
  pub source: PathBuf,
}

/// Staging entries keyed by destination file name.
///
/// Destination names are unique; inserting a name again replaces the earlier
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BundleManifest {
  entries: BTreeMap<String, BundleEntry>,
}

impl BundleManifest {
  /// Insert an entry, returning the one it replaced.
  pub fn insert(&mut self, name: String, entry: BundleEntry) -> Option<BundleEntry> {
    self.entries.insert(name, entry)
  }

  pub fn get(&self, name: &str) -> Option<&BundleEntry> {
    self.entries.get(name)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries ordered by destination file name
  pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleEntry)> {
    self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
  }
}

/// Build the staging manifest for `redist_dir`.
///
/// Every regular file at any depth whose name ends with one of `extensions` is
/// staged as `output_token/<file name>`. Directory structure is flattened, so
/// when two files share a name the one enumerated later wins; enumeration is
/// sorted by file name within each directory.
///
/// A missing or unreadable directory anywhere in the tree is an error.
pub fn bundle(redist_dir: &Path, output_token: &str, extensions: &[String]) -> Result<BundleManifest, BundleError> {
  if !redist_dir.is_dir() {
    return Err(BundleError::RedistDirectoryUnavailable {
      path: redist_dir.to_path_buf(),
      message: "not a directory".to_string(),
    });
  }

  let mut manifest = BundleManifest::default();

  for entry in WalkDir::new(redist_dir).sort_by_file_name() {
    let entry = entry.map_err(|e| BundleError::RedistDirectoryUnavailable {
      path: e.path().unwrap_or(redist_dir).to_path_buf(),
      message: e.to_string(),
    })?;

    if entry.file_type().is_dir() || !entry.path().is_file() {
      continue;
    }

    let name = entry.file_name().to_string_lossy().into_owned();
    if !extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
      continue;
    }

    let staged = BundleEntry {
      destination: Path::new(output_token).join(&name),
      source: entry.path().to_path_buf(),
    };
    debug!(source = %staged.source.display(), "staging runtime dependency");
    if let Some(replaced) = manifest.insert(name, staged) {
      debug!(replaced = %replaced.source.display(), "duplicate file name, later file wins");
    }
  }

  Ok(manifest)
}
