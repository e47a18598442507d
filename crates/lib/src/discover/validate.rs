use std::path::Path;

use tracing::debug;

use super::{DiscoverError, ResolvedHome};
use crate::consts::HEADER_DIRS;
use crate::platform::paths::resolve;

/// Return the first candidate that contains `marker` under one of the header
/// directories.
///
/// Relative candidates are anchored at `base_dir`. Later candidates are never
/// inspected once one matches.
pub fn validate(candidates: &[String], base_dir: &Path, marker: &str) -> Result<ResolvedHome, DiscoverError> {
  let mut tried = Vec::with_capacity(candidates.len());

  for candidate in candidates {
    let path = resolve(candidate, base_dir);
    if has_marker(&path, marker) {
      return Ok(ResolvedHome::new(path));
    }
    debug!(candidate = %candidate, path = %path.display(), "no marker header, skipping");
    tried.push(path);
  }

  Err(DiscoverError::InstallationNotFound {
    marker: marker.to_string(),
    tried,
  })
}

fn has_marker(dir: &Path, marker: &str) -> bool {
  HEADER_DIRS.iter().any(|sub| dir.join(sub).join(marker).is_file())
}
